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

//! Pure pool arithmetic. All divisions floor, all intermediates are `U256`.

use crate::{
	types::{to_balance, SafeMath},
	Config, Error, Pallet,
};
use frame_support::ensure;
use simple_swap_pallet_common::log;
use simple_swap_primitives::{Balance, PRICE_SCALE};
use sp_arithmetic::{
	per_things::{PerThing, Permill},
	traits::Zero,
};
use sp_core::U256;
use sp_runtime::DispatchError;
use sp_std::cmp::min;

impl<T: Config> Pallet<T> {
	/// Given some amount of an asset and pair reserves, returns an equivalent amount of the other
	/// asset
	pub fn quote(
		amount_a: Balance,
		reserve_a: Balance,
		reserve_b: Balance,
	) -> Result<Balance, DispatchError> {
		ensure!(!reserve_a.is_zero(), Error::<T>::NoLiquidity);
		to_balance(U256::from(amount_a).mul(U256::from(reserve_b))?.div(U256::from(reserve_a))?)
	}

	/// Given an input amount of an asset and pair reserves, returns the output amount of the
	/// other asset. No trading fee is taken.
	///
	/// `amount_out = amount_in * reserve_out / (reserve_in + amount_in)`
	pub fn get_amount_out(
		amount_in: Balance,
		reserve_in: Balance,
		reserve_out: Balance,
	) -> Result<Balance, DispatchError> {
		ensure!(!amount_in.is_zero(), Error::<T>::ZeroAmountIn);
		ensure!(!reserve_in.is_zero(), Error::<T>::NoLiquidity);

		let numerator = U256::from(amount_in).mul(U256::from(reserve_out))?;
		let denominator = U256::from(reserve_in).add(U256::from(amount_in))?;
		let amount_out = to_balance(numerator.div(denominator)?)?;

		log!(
			trace,
			"quote in: {:?}, reserves: ({:?}, {:?}), out: {:?}",
			amount_in,
			reserve_in,
			reserve_out,
			amount_out
		);
		Ok(amount_out)
	}

	/// Spot price of one unit of the input asset, scaled by `PRICE_SCALE`.
	/// Kept as `U256`, a lopsided pool prices beyond `Balance::MAX`.
	pub fn price_from_reserves(
		reserve_in: Balance,
		reserve_out: Balance,
	) -> Result<U256, DispatchError> {
		ensure!(!reserve_in.is_zero() && !reserve_out.is_zero(), Error::<T>::NoLiquidity);
		U256::from(reserve_out).mul(U256::from(PRICE_SCALE))?.div(U256::from(reserve_in))
	}

	/// The amounts actually deposited, given desired and minimum amounts in the caller's order
	/// and the matching reserves. An empty pool takes the desired amounts as-is.
	pub fn optimal_deposit(
		amount_a_desired: Balance,
		amount_b_desired: Balance,
		amount_a_min: Balance,
		amount_b_min: Balance,
		reserve_a: Balance,
		reserve_b: Balance,
	) -> Result<(Balance, Balance), DispatchError> {
		if reserve_a.is_zero() && reserve_b.is_zero() {
			return Ok((amount_a_desired, amount_b_desired))
		}

		let amount_b_optimal = Self::quote(amount_a_desired, reserve_a, reserve_b)?;
		if amount_b_optimal <= amount_b_desired {
			ensure!(amount_b_optimal >= amount_b_min, Error::<T>::MinAmountNotMet);
			Ok((amount_a_desired, amount_b_optimal))
		} else {
			let amount_a_optimal = Self::quote(amount_b_desired, reserve_b, reserve_a)?;
			ensure!(
				amount_a_optimal <= amount_a_desired && amount_a_optimal >= amount_a_min,
				Error::<T>::MinAmountNotMet
			);
			Ok((amount_a_optimal, amount_b_desired))
		}
	}

	/// Shares minted for a deposit of `amount_a` and `amount_b`.
	///
	/// The first deposit into an empty pool mints `min(amount_a, amount_b)`.
	pub fn shares_for_deposit(
		amount_a: Balance,
		amount_b: Balance,
		reserve_a: Balance,
		reserve_b: Balance,
		total_shares: Balance,
	) -> Result<Balance, DispatchError> {
		if total_shares.is_zero() {
			return Ok(min(amount_a, amount_b))
		}
		let total = U256::from(total_shares);
		let by_a = U256::from(amount_a).mul(total)?.div(U256::from(reserve_a))?;
		let by_b = U256::from(amount_b).mul(total)?.div(U256::from(reserve_b))?;
		to_balance(min(by_a, by_b))
	}

	/// The portion of `reserve` redeemed by burning `shares` out of `total_shares`
	pub fn share_value(
		shares: Balance,
		reserve: Balance,
		total_shares: Balance,
	) -> Result<Balance, DispatchError> {
		to_balance(U256::from(shares).mul(U256::from(reserve))?.div(U256::from(total_shares))?)
	}

	/// Smallest acceptable result for `amount` under a slippage `tolerance`
	pub fn suggest_min_amount(amount: Balance, tolerance: Permill) -> Balance {
		amount.saturating_sub(tolerance.mul_ceil(amount))
	}
}
