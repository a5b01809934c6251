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

//! Balance movements between accounts and the engine account.
//! The engine spends user funds only through allowances granted to `Pallet::account_id()`.

use crate::{Config, Error, NextShareTokenId, Pallet};
use frame_support::{
	ensure,
	traits::{
		fungibles::{self, approvals, Inspect},
		tokens::{Fortitude, Precision, Preservation},
		Get,
	},
};
use simple_swap_primitives::{AssetId, Balance};
use sp_runtime::{
	traits::{AccountIdConversion, Zero},
	ArithmeticError, DispatchError, DispatchResult,
};

impl<T: Config> Pallet<T> {
	/// The account holding the reserves of every pool
	pub fn account_id() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	pub fn balance_of(asset_id: AssetId, who: &T::AccountId) -> Balance {
		<T::MultiCurrency as Inspect<T::AccountId>>::balance(asset_id, who)
	}

	/// Move `amount` of `asset_id` from `who` into the engine account, spending the allowance
	/// `who` granted to the engine
	pub(crate) fn pull_in(asset_id: AssetId, who: &T::AccountId, amount: Balance) -> DispatchResult {
		if amount.is_zero() {
			return Ok(())
		}
		let engine = Self::account_id();
		ensure!(
			<T::MultiCurrency as approvals::Inspect<T::AccountId>>::allowance(
				asset_id, who, &engine
			) >= amount,
			Error::<T>::InsufficientAllowance
		);
		ensure!(
			<T::MultiCurrency as Inspect<T::AccountId>>::reducible_balance(
				asset_id,
				who,
				Preservation::Expendable,
				Fortitude::Polite,
			) >= amount,
			Error::<T>::InsufficientBalance
		);
		<T::MultiCurrency as approvals::Mutate<T::AccountId>>::transfer_from(
			asset_id, who, &engine, &engine, amount,
		)
	}

	/// Pay `amount` of `asset_id` from the engine account to `to`
	pub(crate) fn pay_out(asset_id: AssetId, to: &T::AccountId, amount: Balance) -> DispatchResult {
		if amount.is_zero() {
			return Ok(())
		}
		<T::MultiCurrency as fungibles::Mutate<T::AccountId>>::transfer(
			asset_id,
			&Self::account_id(),
			to,
			amount,
			Preservation::Expendable,
		)
		.map(|_| ())
	}

	pub(crate) fn mint_shares(share_token: AssetId, to: &T::AccountId, amount: Balance) -> DispatchResult {
		<T::MultiCurrency as fungibles::Mutate<T::AccountId>>::mint_into(share_token, to, amount)
			.map(|_| ())
	}

	pub(crate) fn burn_shares(
		share_token: AssetId,
		who: &T::AccountId,
		amount: Balance,
	) -> DispatchResult {
		ensure!(Self::balance_of(share_token, who) >= amount, Error::<T>::InsufficientBalance);
		<T::MultiCurrency as fungibles::Mutate<T::AccountId>>::burn_from(
			share_token,
			who,
			amount,
			Precision::Exact,
			Fortitude::Polite,
		)
		.map(|_| ())
	}

	/// Register a fresh share token owned by the engine account.
	/// Ids already taken in the ledger are skipped.
	pub(crate) fn create_share_token() -> Result<AssetId, DispatchError> {
		let mut share_token = NextShareTokenId::<T>::get();
		while <T::MultiCurrency as Inspect<T::AccountId>>::asset_exists(share_token) {
			share_token = share_token.checked_add(1).ok_or(ArithmeticError::Overflow)?;
		}
		<T::MultiCurrency as fungibles::Create<T::AccountId>>::create(
			share_token,
			Self::account_id(),
			true,
			1,
		)?;
		NextShareTokenId::<T>::put(share_token.checked_add(1).ok_or(ArithmeticError::Overflow)?);
		Ok(share_token)
	}
}
