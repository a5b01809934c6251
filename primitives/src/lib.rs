// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the LGPL, Version 3.0 (the "License");
// you may not use this file except in compliance with the License.
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

//! Common types across runtimes and pallets
#![cfg_attr(not(feature = "std"), no_std)]

pub use types::*;

#[cfg(feature = "std")]
pub mod test_utils;

/// The reserved asset id, never a valid pool token
pub const NULL_ASSET_ID: AssetId = 0;

/// Fixed point scale used when quoting spot prices (18 decimals)
pub const PRICE_SCALE: Balance = 1_000_000_000_000_000_000;

pub mod types {
	use sp_runtime::traits::{IdentifyAccount, Verify};

	/// An index to a block.
	pub type BlockNumber = u32;

	/// Alias to the signature scheme used on the chain.
	pub type Signature = sp_runtime::MultiSignature;

	/// Some way of identifying an account on the chain. We intentionally make it equivalent
	/// to the public key of our transaction signing scheme.
	pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

	/// Balance of an account.
	pub type Balance = u128;

	// Id used for identifying assets.
	pub type AssetId = u32;

	/// Seconds since the UNIX epoch, used for deadlines
	pub type Moment = u64;
}
