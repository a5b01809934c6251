// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

/// Prelude to be used in mocks and tests, for ease of use
pub mod test_prelude {
	pub use crate::{
		test_utils::{account_creation::*, test_constants::*, *},
		*,
	};
	pub use frame_support::{assert_noop, assert_ok, construct_runtime, parameter_types, PalletId};
	pub use frame_system::EnsureRoot;
	pub use simple_swap_primitives::{
		test_utils::TestExt, AccountId, AssetId, Balance, Moment, NULL_ASSET_ID, PRICE_SCALE,
	};
	pub use sp_core::{H256, U256};
	pub use sp_runtime::{
		traits::{BlakeTwo256, IdentityLookup},
		DispatchError::BadOrigin,
		Permill,
	};
	pub use sp_std::{vec, vec::Vec};
}

pub mod test_constants {
	use simple_swap_primitives::{AssetId, Balance};

	pub const TKA_ASSET_ID: AssetId = 1;
	pub const TKB_ASSET_ID: AssetId = 2;
	pub const TKC_ASSET_ID: AssetId = 3;
	/// First asset id handed out to pool share tokens
	pub const SHARE_TOKEN_ID_START: AssetId = 1_000;
	/// Native balance endowed to test accounts, covers approval deposits
	pub const NATIVE_ENDOWMENT: Balance = 1_000_000;
}

/// Helper functions for creating accounts to be used in tests
pub mod account_creation {
	use simple_swap_primitives::{test_utils::account_from_seed, AccountId};

	/// Create an AccountId from a u64 seed
	pub fn create_account(seed: u64) -> AccountId {
		account_from_seed(seed)
	}

	/// Common account Alice
	pub fn alice() -> AccountId {
		create_account(1000)
	}

	/// Common account Bob
	pub fn bob() -> AccountId {
		create_account(2000)
	}

	/// Common account Charlie
	pub fn charlie() -> AccountId {
		create_account(3000)
	}
}

#[macro_export]
macro_rules! impl_frame_system_config {
	($test:ident) => {
		parameter_types! {
			pub const BlockHashCount: u64 = 250;
		}

		impl frame_system::Config for $test {
			type Block = frame_system::mocking::MockBlock<$test>;
			type BlockWeights = ();
			type BlockLength = ();
			type BaseCallFilter = frame_support::traits::Everything;
			type RuntimeOrigin = RuntimeOrigin;
			type Nonce = u32;
			type RuntimeCall = RuntimeCall;
			type Hash = H256;
			type Hashing = BlakeTwo256;
			type AccountId = AccountId;
			type Lookup = IdentityLookup<Self::AccountId>;
			type BlockHashCount = BlockHashCount;
			type RuntimeEvent = RuntimeEvent;
			type DbWeight = ();
			type Version = ();
			type PalletInfo = PalletInfo;
			type AccountData = pallet_balances::AccountData<Balance>;
			type OnNewAccount = ();
			type OnKilledAccount = ();
			type SystemWeightInfo = ();
			type SS58Prefix = ();
			type OnSetCode = ();
			type MaxConsumers = frame_support::traits::ConstU32<16>;
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_balance_config {
	($test:ident) => {
		parameter_types! {
			pub const MaxReserves: u32 = 50;
			pub const ExistentialDeposit: u128 = 1;
		}

		impl pallet_balances::Config for $test {
			type Balance = Balance;
			type RuntimeEvent = RuntimeEvent;
			type RuntimeHoldReason = ();
			type FreezeIdentifier = ();
			type DustRemoval = ();
			type ExistentialDeposit = ExistentialDeposit;
			type AccountStore = System;
			type MaxLocks = ();
			type WeightInfo = ();
			type MaxReserves = MaxReserves;
			type ReserveIdentifier = [u8; 8];
			type MaxHolds = sp_core::ConstU32<0>;
			type MaxFreezes = sp_core::ConstU32<0>;
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_timestamp_config {
	($test:ident) => {
		parameter_types! {
			pub const MinimumPeriod: u64 = 5;
		}

		impl pallet_timestamp::Config for $test {
			type Moment = u64;
			type OnTimestampSet = ();
			type MinimumPeriod = MinimumPeriod;
			type WeightInfo = ();
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_assets_config {
	($test:ident) => {
		parameter_types! {
			pub const AssetDeposit: Balance = 1_000_000;
			pub const AssetAccountDeposit: Balance = 16;
			pub const ApprovalDeposit: Balance = 1;
			pub const AssetsStringLimit: u32 = 50;
			pub const MetadataDepositBase: Balance = 1 * 68;
			pub const MetadataDepositPerByte: Balance = 1;
			pub const RemoveItemsLimit: u32 = 100;
		}

		impl pallet_assets::Config for $test {
			type RuntimeEvent = RuntimeEvent;
			type Balance = Balance;
			type AssetId = AssetId;
			type Currency = Balances;
			type ForceOrigin = EnsureRoot<AccountId>;
			type AssetDeposit = AssetDeposit;
			type MetadataDepositBase = MetadataDepositBase;
			type MetadataDepositPerByte = MetadataDepositPerByte;
			type ApprovalDeposit = ApprovalDeposit;
			type StringLimit = AssetsStringLimit;
			type Freezer = ();
			type Extra = ();
			type WeightInfo = ();
			type AssetAccountDeposit = AssetAccountDeposit;
			type RemoveItemsLimit = RemoveItemsLimit;
			type AssetIdParameter = AssetId;
			type CreateOrigin = frame_system::EnsureNever<AccountId>;
			type CallbackHandle = ();
			pallet_assets::runtime_benchmarks_enabled! {
				type BenchmarkHelper = ();
			}
		}
	};
}

#[macro_export]
macro_rules! impl_pallet_simple_swap_config {
	($test:ident) => {
		parameter_types! {
			pub const SimpleSwapPalletId: PalletId = PalletId(*b"smplswap");
			pub const ShareTokenIdStart: AssetId = SHARE_TOKEN_ID_START;
		}

		impl pallet_simple_swap::Config for $test {
			type RuntimeEvent = RuntimeEvent;
			type PalletId = SimpleSwapPalletId;
			type ShareTokenIdStart = ShareTokenIdStart;
			type UnixTime = Timestamp;
			type MultiCurrency = Assets;
			type WeightInfo = ();
		}
	};
}
