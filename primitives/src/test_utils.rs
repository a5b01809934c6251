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

use crate::*;
use sp_io::TestExternalities;
use sp_runtime::BuildStorage;
use sp_std::vec::Vec;

/// Account which owns every genesis asset
pub const ASSET_OWNER_SEED: u64 = 100;

/// Start of time in tests, seconds since the UNIX epoch
pub const GENESIS_TIMESTAMP: Moment = 1_700_000_000;

struct AssetsFixture<T: frame_system::Config + pallet_assets::Config> {
	pub id: <T as pallet_assets::Config>::AssetId,
	pub symbol: Vec<u8>,
	pub endowments: Vec<(T::AccountId, <T as pallet_assets::Config>::Balance)>,
}

impl<T: frame_system::Config + pallet_assets::Config> AssetsFixture<T> {
	fn new(
		id: <T as pallet_assets::Config>::AssetId,
		symbol: &[u8],
		endowments: &[(T::AccountId, <T as pallet_assets::Config>::Balance)],
	) -> Self {
		Self { id, symbol: symbol.to_vec(), endowments: endowments.to_vec() }
	}
}

/// Build an account id from a numeric seed
pub fn account_from_seed<A: From<[u8; 32]>>(seed: u64) -> A {
	let mut raw = [0_u8; 32];
	raw[24..].copy_from_slice(&seed.to_be_bytes());
	A::from(raw)
}

/// Generic TestExternalities builder to be used across all pallets
pub struct TestExt<
	T: frame_system::Config + pallet_balances::Config + pallet_assets::Config + pallet_timestamp::Config,
> {
	balances: Vec<(T::AccountId, <T as pallet_balances::Config>::Balance)>,
	assets: Vec<AssetsFixture<T>>,
	block_number: BlockNumber,
	timestamp: Moment,
}

impl<T> Default for TestExt<T>
where
	T: frame_system::Config
		+ pallet_balances::Config
		+ pallet_assets::Config
		+ pallet_timestamp::Config,
{
	/// Create new TestExt with default values
	fn default() -> Self {
		Self { balances: vec![], assets: vec![], block_number: 1, timestamp: GENESIS_TIMESTAMP }
	}
}

impl<T> TestExt<T>
where
	T: frame_system::Config
		+ pallet_balances::Config
		+ pallet_assets::Config
		+ pallet_timestamp::Config,
	<T as pallet_assets::Config>::Balance: From<Balance>,
	<T as pallet_assets::Config>::AssetId: From<AssetId>,
	<T as pallet_timestamp::Config>::Moment: From<u64>,
	<T as frame_system::Config>::AccountId: From<[u8; 32]>,
	<T as frame_system::Config>::Hash: From<[u8; 32]>,
	frame_system::pallet_prelude::BlockNumberFor<T>: From<BlockNumber>,
{
	/// Configure some native token balances
	pub fn with_balances(
		mut self,
		balances: &[(T::AccountId, <T as pallet_balances::Config>::Balance)],
	) -> Self {
		self.balances = balances.to_vec();
		self
	}

	/// Configure an asset with id, name and some endowments
	/// total supply = sum(endowments)
	pub fn with_asset(
		mut self,
		id: AssetId,
		name: &str,
		endowments: &[(T::AccountId, <T as pallet_assets::Config>::Balance)],
	) -> Self {
		self.assets.push(AssetsFixture::new(id.into(), name.as_bytes(), endowments));
		self
	}

	/// Configure the starting wall clock, in seconds
	pub fn with_timestamp(mut self, timestamp: Moment) -> Self {
		self.timestamp = timestamp;
		self
	}

	/// Build the Test Externalities for general use across all pallets
	pub fn build(self) -> TestExternalities {
		let mut ext = frame_system::GenesisConfig::<T>::default().build_storage().unwrap();
		let mut assets = Vec::default();
		let mut metadata = Vec::default();
		let mut accounts = Vec::default();
		let default_owner: T::AccountId = account_from_seed(ASSET_OWNER_SEED);

		// add assets
		for AssetsFixture { id, symbol, endowments } in self.assets {
			assets.push((id.clone(), default_owner.clone(), true, 1_u128.into()));
			metadata.push((id.clone(), symbol.clone(), symbol, 18));
			for (payee, balance) in endowments {
				accounts.push((id.clone(), payee, balance));
			}
		}

		// Configure pallet_assets Genesis Config with assets
		if !assets.is_empty() {
			pallet_assets::GenesisConfig::<T> { assets, metadata, accounts }
				.assimilate_storage(&mut ext)
				.unwrap();
		}

		// add initial balances to Genesis Config
		if !self.balances.is_empty() {
			pallet_balances::GenesisConfig::<T> { balances: self.balances }
				.assimilate_storage(&mut ext)
				.unwrap();
		}

		let block_number = self.block_number;
		let timestamp = self.timestamp;
		let mut ext: TestExternalities = ext.into();
		ext.execute_with(|| {
			frame_system::Pallet::<T>::initialize(
				&block_number.into(),
				&[0u8; 32].into(),
				&Default::default(),
			);
			// pallet-timestamp counts milliseconds
			pallet_timestamp::Pallet::<T>::set_timestamp(timestamp.saturating_mul(1_000).into());
		});

		ext
	}
}
