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

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use simple_swap_primitives::{AssetId, Balance};
use sp_core::U256;
use sp_runtime::{ArithmeticError, DispatchError, RuntimeDebug};

/// An unordered pair of assets stored in canonical order, `.0 < .1`
#[derive(
	Encode,
	Decode,
	Eq,
	PartialEq,
	Copy,
	Clone,
	RuntimeDebug,
	PartialOrd,
	Ord,
	TypeInfo,
	MaxEncodedLen,
)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct TradingPair(pub AssetId, pub AssetId);

impl From<(AssetId, AssetId)> for TradingPair {
	fn from(asset_ids: (AssetId, AssetId)) -> Self {
		if asset_ids.0 > asset_ids.1 {
			TradingPair(asset_ids.1, asset_ids.0)
		} else {
			TradingPair(asset_ids.0, asset_ids.1)
		}
	}
}

impl TradingPair {
	pub fn new(asset_id_a: AssetId, asset_id_b: AssetId) -> Self {
		TradingPair::from((asset_id_a, asset_id_b))
	}

	/// Which reserve slot `asset_id` occupies in this pair, if any
	pub fn slot_of(&self, asset_id: AssetId) -> Option<PoolSlot> {
		if asset_id == self.0 {
			Some(PoolSlot::Zero)
		} else if asset_id == self.1 {
			Some(PoolSlot::One)
		} else {
			None
		}
	}
}

/// One of the two reserve positions of a pool
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum PoolSlot {
	Zero,
	One,
}

impl PoolSlot {
	pub fn other(self) -> Self {
		match self {
			PoolSlot::Zero => PoolSlot::One,
			PoolSlot::One => PoolSlot::Zero,
		}
	}
}

/// Lifecycle of a pool
#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum PoolStatus {
	/// No pool yet, or every share has been burned
	Uninitialized,
	/// Reserves and share supply are non-zero
	Funded,
}

/// Reserve and share accounting for one pair, stored in canonical order
#[derive(
	Clone, Copy, Encode, Decode, Default, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct PoolInfo {
	/// The asset minted to liquidity providers of this pool
	pub share_token: AssetId,
	pub reserve_0: Balance,
	pub reserve_1: Balance,
	/// Outstanding supply of `share_token`
	pub total_shares: Balance,
}

impl PoolInfo {
	pub fn new(share_token: AssetId) -> Self {
		Self { share_token, ..Default::default() }
	}

	pub fn reserve(&self, slot: PoolSlot) -> Balance {
		match slot {
			PoolSlot::Zero => self.reserve_0,
			PoolSlot::One => self.reserve_1,
		}
	}

	pub fn credit(&mut self, slot: PoolSlot, amount: Balance) -> Result<(), DispatchError> {
		match slot {
			PoolSlot::Zero => self.reserve_0 = self.reserve_0.add(amount)?,
			PoolSlot::One => self.reserve_1 = self.reserve_1.add(amount)?,
		}
		Ok(())
	}

	pub fn debit(&mut self, slot: PoolSlot, amount: Balance) -> Result<(), DispatchError> {
		match slot {
			PoolSlot::Zero => self.reserve_0 = self.reserve_0.sub(amount)?,
			PoolSlot::One => self.reserve_1 = self.reserve_1.sub(amount)?,
		}
		Ok(())
	}

	/// Both reserves are positive
	pub fn is_funded(&self) -> bool {
		self.reserve_0 > 0 && self.reserve_1 > 0
	}

	pub fn status(&self) -> PoolStatus {
		if self.total_shares == 0 {
			PoolStatus::Uninitialized
		} else {
			PoolStatus::Funded
		}
	}
}

/// Canonical reserve snapshot returned to readers
#[derive(Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct PoolReserves {
	pub reserve_0: Balance,
	pub reserve_1: Balance,
	pub total_liquidity: Balance,
}

impl From<PoolInfo> for PoolReserves {
	fn from(pool: PoolInfo) -> Self {
		Self {
			reserve_0: pool.reserve_0,
			reserve_1: pool.reserve_1,
			total_liquidity: pool.total_shares,
		}
	}
}

/// Checked arithmetic reporting failures as `DispatchError::Arithmetic`
pub trait SafeMath {
	type Output;

	fn add(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
	fn sub(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
	fn mul(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
	fn div(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError>;
}

macro_rules! safe_math {
	($type: ident) => {
		/// $type implementation of the SafeMath trait
		impl SafeMath for $type {
			type Output = $type;

			fn add(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_add(rhs).ok_or(ArithmeticError::Overflow.into())
			}

			fn sub(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_sub(rhs).ok_or(ArithmeticError::Underflow.into())
			}

			fn mul(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_mul(rhs).ok_or(ArithmeticError::Overflow.into())
			}

			fn div(&self, rhs: Self::Output) -> Result<Self::Output, DispatchError> {
				self.checked_div(rhs).ok_or(ArithmeticError::DivisionByZero.into())
			}
		}
	};
}

// implement SafeMath via macro for U256 and the balance type
safe_math!(U256);
safe_math!(u128);

/// Narrow a `U256` intermediate back into a `Balance`
pub fn to_balance(value: U256) -> Result<Balance, DispatchError> {
	if value > U256::from(Balance::MAX) {
		return Err(ArithmeticError::Overflow.into())
	}
	Ok(value.low_u128())
}
