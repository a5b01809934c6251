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
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::unused_unit)]

//! # SimpleSwap
//!
//! Constant product market maker over pairs of fungible assets.
//!
//! Each unordered pair of assets has at most one pool, keyed by its canonical `TradingPair`.
//! Liquidity providers deposit both assets and receive the pool's share token. Traders swap an
//! exact input for `amount_in * reserve_out / (reserve_in + amount_in)` of the other asset.
//! No trading fee is taken.
//!
//! Users approve the engine account (`Pallet::account_id`) on the asset ledger before adding
//! liquidity or swapping. Deadlines are UNIX timestamps in seconds.

pub use pallet::*;

use frame_support::{
	pallet_prelude::*,
	traits::{fungibles, UnixTime},
	transactional, PalletId,
};
use frame_system::pallet_prelude::*;
use simple_swap_pallet_common::log;
use simple_swap_primitives::{AssetId, Balance, Moment, NULL_ASSET_ID};
use sp_core::U256;
use sp_runtime::{traits::Zero, DispatchError};
use sp_std::prelude::*;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
mod ledger;
mod math;
#[cfg(test)]
mod mock;
pub mod types;
use types::SafeMath;
pub use types::{PoolInfo, PoolReserves, PoolSlot, PoolStatus, TradingPair};
pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "simple-swap";

#[frame_support::pallet]
pub mod pallet {
	use super::*;

	/// The current storage version.
	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// The engine's id, used to derive the account holding every pool's reserves
		#[pallet::constant]
		type PalletId: Get<PalletId>;

		/// The first asset id handed out to a pool share token
		#[pallet::constant]
		type ShareTokenIdStart: Get<AssetId>;

		/// Wall clock used for deadline checks
		type UnixTime: UnixTime;

		/// Ledger for traded assets and pool share tokens
		type MultiCurrency: fungibles::Inspect<Self::AccountId, AssetId = AssetId, Balance = Balance>
			+ fungibles::Mutate<Self::AccountId>
			+ fungibles::Create<Self::AccountId>
			+ fungibles::approvals::Inspect<Self::AccountId>
			+ fungibles::approvals::Mutate<Self::AccountId>;

		/// Weight information for the extrinsic call in this module.
		type WeightInfo: WeightInfo;
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The deadline has passed
		DeadlineExpired,
		/// Both sides of the pair are the same asset
		IdenticalTokens,
		/// The null asset id, or an asset the ledger does not know
		InvalidToken,
		/// Desired amount of the first token is zero
		ZeroDesiredAmount,
		/// A minimum amount is greater than its desired amount
		MinExceedsDesired,
		/// The amount is below the caller's minimum
		MinAmountNotMet,
		/// The deposit is too small to mint any shares
		ZeroLiquidity,
		/// Swap input amount is zero
		ZeroAmountIn,
		/// The pool has no reserves
		NoLiquidity,
		/// Swap output is below the caller's minimum
		InsufficientOutputAmount,
		/// The holder's balance cannot cover the amount
		InsufficientBalance,
		/// The engine's allowance cannot cover the amount
		InsufficientAllowance,
		/// Share amount to remove is zero
		ZeroShareAmount,
		/// Swap path must contain exactly two assets
		InvalidPathLength,
	}

	#[pallet::event]
	#[pallet::generate_deposit(pub(crate) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Liquidity was added to a pool. Amounts follow the caller's token order.
		LiquidityAdded {
			token_a: AssetId,
			token_b: AssetId,
			provider: T::AccountId,
			amount_a: Balance,
			amount_b: Balance,
			shares: Balance,
		},
		/// Liquidity was removed from a pool. Amounts follow the caller's token order.
		LiquidityRemoved {
			token_a: AssetId,
			token_b: AssetId,
			provider: T::AccountId,
			amount_a: Balance,
			amount_b: Balance,
			shares: Balance,
		},
		/// An exact input swap was executed
		SwappedTokens {
			token_in: AssetId,
			token_out: AssetId,
			trader: T::AccountId,
			amount_in: Balance,
			amount_out: Balance,
		},
	}

	#[pallet::type_value]
	pub fn DefaultShareTokenId<T: Config>() -> AssetId {
		T::ShareTokenIdStart::get()
	}

	/// The id the next pool share token will be created with
	#[pallet::storage]
	#[pallet::getter(fn next_share_token_id)]
	pub type NextShareTokenId<T: Config> =
		StorageValue<_, AssetId, ValueQuery, DefaultShareTokenId<T>>;

	/// Pool state keyed by canonical pair
	#[pallet::storage]
	#[pallet::getter(fn pools)]
	pub type Pools<T: Config> = StorageMap<_, Twox64Concat, TradingPair, PoolInfo, OptionQuery>;

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Add liquidity to the `token_a`/`token_b` pool, creating the pool on first use.
		/// - note: analogous to Uniswapv2 `addLiquidity`
		///
		/// - `token_a`: Asset id A.
		/// - `token_b`: Asset id B.
		/// - `amount_a_desired`: amount a desired to add.
		/// - `amount_b_desired`: amount b desired to add.
		/// - `amount_a_min`: amount a minimum willing to add.
		/// - `amount_b_min`: amount b minimum willing to add.
		/// - `to`: The recipient of the share tokens. The caller is the default recipient if it is
		///   set to None.
		/// - `deadline`: UNIX timestamp in seconds after which the call is rejected.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::add_liquidity())]
		pub fn add_liquidity(
			origin: OriginFor<T>,
			token_a: AssetId,
			token_b: AssetId,
			#[pallet::compact] amount_a_desired: Balance,
			#[pallet::compact] amount_b_desired: Balance,
			#[pallet::compact] amount_a_min: Balance,
			#[pallet::compact] amount_b_min: Balance,
			to: Option<T::AccountId>,
			deadline: Moment,
		) -> DispatchResultWithPostInfo {
			let who = ensure_signed(origin)?;

			Self::do_add_liquidity(
				&who,
				token_a,
				token_b,
				amount_a_desired,
				amount_b_desired,
				amount_a_min,
				amount_b_min,
				to.unwrap_or(who.clone()),
				deadline,
			)?;
			Ok(().into())
		}

		/// Burn pool shares and withdraw the matching portion of both reserves.
		/// - note: analogous to Uniswapv2 `removeLiquidity`
		///
		/// - `token_a`: Asset id A.
		/// - `token_b`: Asset id B.
		/// - `shares`: share amount to burn.
		/// - `amount_a_min`: minimum amount of asset A to be withdrawn.
		/// - `amount_b_min`: minimum amount of asset B to be withdrawn.
		/// - `to`: The recipient of the withdrawn assets. The caller is the default recipient if it
		///   is set to None.
		/// - `deadline`: UNIX timestamp in seconds after which the call is rejected.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::remove_liquidity())]
		pub fn remove_liquidity(
			origin: OriginFor<T>,
			token_a: AssetId,
			token_b: AssetId,
			#[pallet::compact] shares: Balance,
			#[pallet::compact] amount_a_min: Balance,
			#[pallet::compact] amount_b_min: Balance,
			to: Option<T::AccountId>,
			deadline: Moment,
		) -> DispatchResultWithPostInfo {
			let who = ensure_signed(origin)?;

			Self::do_remove_liquidity(
				&who,
				token_a,
				token_b,
				shares,
				amount_a_min,
				amount_b_min,
				to.unwrap_or(who.clone()),
				deadline,
			)?;
			Ok(().into())
		}

		/// Swap an exact amount of `path[0]` for as much `path[1]` as the pool gives.
		/// - note: analogous to Uniswapv2 `swapExactTokensForTokens`
		///
		/// - `amount_in`: exact supply amount.
		/// - `amount_out_min`: acceptable minimum target amount.
		/// - `path`: trading path, exactly two assets.
		/// - `to`: The recipient of the swapped asset. The caller is the default recipient if it
		///   is set to None.
		/// - `deadline`: UNIX timestamp in seconds after which the call is rejected.
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::swap_exact_tokens_for_tokens())]
		pub fn swap_exact_tokens_for_tokens(
			origin: OriginFor<T>,
			#[pallet::compact] amount_in: Balance,
			#[pallet::compact] amount_out_min: Balance,
			path: Vec<AssetId>,
			to: Option<T::AccountId>,
			deadline: Moment,
		) -> DispatchResultWithPostInfo {
			let who = ensure_signed(origin)?;

			Self::do_swap_exact_tokens_for_tokens(
				&who,
				amount_in,
				amount_out_min,
				&path,
				to.unwrap_or(who.clone()),
				deadline,
			)?;
			Ok(().into())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// Current wall clock in seconds
	pub fn now() -> Moment {
		T::UnixTime::now().as_secs()
	}

	fn ensure_deadline(deadline: Moment) -> DispatchResult {
		ensure!(Self::now() <= deadline, Error::<T>::DeadlineExpired);
		Ok(())
	}

	/// Sort two distinct assets into their canonical pair
	pub fn canonical_order(
		token_a: AssetId,
		token_b: AssetId,
	) -> Result<TradingPair, DispatchError> {
		ensure!(token_a != token_b, Error::<T>::IdenticalTokens);
		Ok(TradingPair::new(token_a, token_b))
	}

	fn ensure_valid_pair(trading_pair: &TradingPair) -> DispatchResult {
		for asset_id in [trading_pair.0, trading_pair.1] {
			ensure!(
				asset_id != NULL_ASSET_ID &&
					<T::MultiCurrency as fungibles::Inspect<T::AccountId>>::asset_exists(asset_id),
				Error::<T>::InvalidToken
			);
		}
		Ok(())
	}

	/// Returns the pool for `trading_pair`, creating an empty one with a fresh share token if
	/// none exists
	pub fn get_or_create_pool(trading_pair: TradingPair) -> Result<PoolInfo, DispatchError> {
		Self::ensure_valid_pair(&trading_pair)?;
		if let Some(pool) = Self::pools(trading_pair) {
			return Ok(pool)
		}

		let share_token = Self::create_share_token()?;
		let pool = PoolInfo::new(share_token);
		Pools::<T>::insert(trading_pair, pool);
		log!(debug, "created pool {:?} with share token {:?}", trading_pair, share_token);
		Ok(pool)
	}

	/// Add liquidity, returning `(amount_a, amount_b, shares)` in the caller's token order
	#[transactional]
	pub fn do_add_liquidity(
		who: &T::AccountId,
		token_a: AssetId,
		token_b: AssetId,
		amount_a_desired: Balance,
		amount_b_desired: Balance,
		amount_a_min: Balance,
		amount_b_min: Balance,
		to: T::AccountId,
		deadline: Moment,
	) -> Result<(Balance, Balance, Balance), DispatchError> {
		Self::ensure_deadline(deadline)?;
		let trading_pair = Self::canonical_order(token_a, token_b)?;
		Self::ensure_valid_pair(&trading_pair)?;
		ensure!(!amount_a_desired.is_zero(), Error::<T>::ZeroDesiredAmount);
		ensure!(
			amount_a_min <= amount_a_desired && amount_b_min <= amount_b_desired,
			Error::<T>::MinExceedsDesired
		);

		let mut pool = Self::get_or_create_pool(trading_pair)?;
		let slot_a = trading_pair.slot_of(token_a).ok_or(Error::<T>::InvalidToken)?;
		let slot_b = slot_a.other();
		let (reserve_a, reserve_b) = (pool.reserve(slot_a), pool.reserve(slot_b));

		let (amount_a, amount_b) = Self::optimal_deposit(
			amount_a_desired,
			amount_b_desired,
			amount_a_min,
			amount_b_min,
			reserve_a,
			reserve_b,
		)?;
		let shares =
			Self::shares_for_deposit(amount_a, amount_b, reserve_a, reserve_b, pool.total_shares)?;
		ensure!(!shares.is_zero(), Error::<T>::ZeroLiquidity);

		Self::pull_in(token_a, who, amount_a)?;
		Self::pull_in(token_b, who, amount_b)?;
		Self::mint_shares(pool.share_token, &to, shares)?;

		pool.credit(slot_a, amount_a)?;
		pool.credit(slot_b, amount_b)?;
		pool.total_shares = pool.total_shares.add(shares)?;
		Pools::<T>::insert(trading_pair, pool);

		log!(
			debug,
			"{:?} added {:?}/{:?} to {:?}, minted {:?} shares",
			who,
			amount_a,
			amount_b,
			trading_pair,
			shares
		);
		Self::deposit_event(Event::LiquidityAdded {
			token_a,
			token_b,
			provider: who.clone(),
			amount_a,
			amount_b,
			shares,
		});
		Ok((amount_a, amount_b, shares))
	}

	/// Remove liquidity, returning `(amount_a, amount_b)` in the caller's token order
	#[transactional]
	pub fn do_remove_liquidity(
		who: &T::AccountId,
		token_a: AssetId,
		token_b: AssetId,
		shares: Balance,
		amount_a_min: Balance,
		amount_b_min: Balance,
		to: T::AccountId,
		deadline: Moment,
	) -> Result<(Balance, Balance), DispatchError> {
		Self::ensure_deadline(deadline)?;
		let trading_pair = Self::canonical_order(token_a, token_b)?;
		Self::ensure_valid_pair(&trading_pair)?;
		ensure!(!shares.is_zero(), Error::<T>::ZeroShareAmount);

		let mut pool = Self::pools(trading_pair)
			.filter(|pool| !pool.total_shares.is_zero())
			.ok_or(Error::<T>::NoLiquidity)?;
		ensure!(
			Self::balance_of(pool.share_token, who) >= shares,
			Error::<T>::InsufficientBalance
		);

		let slot_a = trading_pair.slot_of(token_a).ok_or(Error::<T>::InvalidToken)?;
		let slot_b = slot_a.other();
		let amount_a = Self::share_value(shares, pool.reserve(slot_a), pool.total_shares)?;
		let amount_b = Self::share_value(shares, pool.reserve(slot_b), pool.total_shares)?;
		ensure!(
			amount_a >= amount_a_min && amount_b >= amount_b_min,
			Error::<T>::MinAmountNotMet
		);

		Self::burn_shares(pool.share_token, who, shares)?;
		pool.debit(slot_a, amount_a)?;
		pool.debit(slot_b, amount_b)?;
		pool.total_shares = pool.total_shares.sub(shares)?;
		Pools::<T>::insert(trading_pair, pool);

		Self::pay_out(token_a, &to, amount_a)?;
		Self::pay_out(token_b, &to, amount_b)?;

		log!(
			debug,
			"{:?} burned {:?} shares of {:?} for {:?}/{:?}",
			who,
			shares,
			trading_pair,
			amount_a,
			amount_b
		);
		Self::deposit_event(Event::LiquidityRemoved {
			token_a,
			token_b,
			provider: who.clone(),
			amount_a,
			amount_b,
			shares,
		});
		Ok((amount_a, amount_b))
	}

	/// Swap exactly `amount_in` of `path[0]` for `path[1]`, returning the amount paid out
	#[transactional]
	pub fn do_swap_exact_tokens_for_tokens(
		who: &T::AccountId,
		amount_in: Balance,
		amount_out_min: Balance,
		path: &[AssetId],
		to: T::AccountId,
		deadline: Moment,
	) -> Result<Balance, DispatchError> {
		Self::ensure_deadline(deadline)?;
		ensure!(path.len() == 2, Error::<T>::InvalidPathLength);
		let (token_in, token_out) = (path[0], path[1]);
		let trading_pair = Self::canonical_order(token_in, token_out)?;
		Self::ensure_valid_pair(&trading_pair)?;

		let mut pool = Self::pools(trading_pair)
			.filter(PoolInfo::is_funded)
			.ok_or(Error::<T>::NoLiquidity)?;
		let slot_in = trading_pair.slot_of(token_in).ok_or(Error::<T>::InvalidToken)?;
		let slot_out = slot_in.other();

		let amount_out =
			Self::get_amount_out(amount_in, pool.reserve(slot_in), pool.reserve(slot_out))?;
		ensure!(amount_out >= amount_out_min, Error::<T>::InsufficientOutputAmount);

		Self::pull_in(token_in, who, amount_in)?;
		Self::pay_out(token_out, &to, amount_out)?;

		pool.credit(slot_in, amount_in)?;
		pool.debit(slot_out, amount_out)?;
		Pools::<T>::insert(trading_pair, pool);

		log!(
			debug,
			"{:?} swapped {:?} of {:?} for {:?} of {:?}",
			who,
			amount_in,
			token_in,
			amount_out,
			token_out
		);
		Self::deposit_event(Event::SwappedTokens {
			token_in,
			token_out,
			trader: who.clone(),
			amount_in,
			amount_out,
		});
		Ok(amount_out)
	}

	/// Canonical reserves and share supply of a pool, zero if it does not exist.
	/// The tokens may be passed in either order.
	pub fn reserves(token_a: AssetId, token_b: AssetId) -> PoolReserves {
		Self::pools(TradingPair::new(token_a, token_b)).map(Into::into).unwrap_or_default()
	}

	/// Reserves of `token_a` and `token_b`, in that order
	pub fn get_liquidity(token_a: AssetId, token_b: AssetId) -> (Balance, Balance) {
		let trading_pair = TradingPair::new(token_a, token_b);
		match (Self::pools(trading_pair), trading_pair.slot_of(token_a)) {
			(Some(pool), Some(slot_a)) => (pool.reserve(slot_a), pool.reserve(slot_a.other())),
			_ => (0, 0),
		}
	}

	/// Price of one `token_in` in `token_out`, scaled by `PRICE_SCALE`
	pub fn get_price(token_in: AssetId, token_out: AssetId) -> Result<U256, DispatchError> {
		Self::canonical_order(token_in, token_out)?;
		let (reserve_in, reserve_out) = Self::get_liquidity(token_in, token_out);
		Self::price_from_reserves(reserve_in, reserve_out)
	}

	/// Output a swap of `amount_in` would currently receive
	pub fn quote_swap(
		amount_in: Balance,
		token_in: AssetId,
		token_out: AssetId,
	) -> Result<Balance, DispatchError> {
		Self::canonical_order(token_in, token_out)?;
		let (reserve_in, reserve_out) = Self::get_liquidity(token_in, token_out);
		Self::get_amount_out(amount_in, reserve_in, reserve_out)
	}

	pub fn share_token_id(token_a: AssetId, token_b: AssetId) -> Option<AssetId> {
		Self::pools(TradingPair::new(token_a, token_b)).map(|pool| pool.share_token)
	}

	/// Pool shares of the `token_a`/`token_b` pool held by `who`
	pub fn share_balance(token_a: AssetId, token_b: AssetId, who: &T::AccountId) -> Balance {
		Self::share_token_id(token_a, token_b)
			.map(|share_token| Self::balance_of(share_token, who))
			.unwrap_or_default()
	}

	pub fn pool_status(token_a: AssetId, token_b: AssetId) -> PoolStatus {
		Self::pools(TradingPair::new(token_a, token_b))
			.map(|pool| pool.status())
			.unwrap_or(PoolStatus::Uninitialized)
	}
}
