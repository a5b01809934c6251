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

//! SimpleSwap benchmarking.

use super::*;

use frame_benchmarking::{account as bench_account, benchmarks, impl_benchmark_test_suite, vec};
use frame_support::{
	assert_ok,
	traits::fungibles::{approvals, Create, Inspect, Mutate},
};
use frame_system::RawOrigin;

use crate::Pallet as SimpleSwap;

const TOKEN_A: AssetId = 1;
const TOKEN_B: AssetId = 2;
const ENDOWMENT: Balance = 1_000_000_000_000;

/// This is a helper function to get an account.
pub fn account<T: Config>(name: &'static str) -> T::AccountId {
	bench_account(name, 0, 0)
}

pub fn origin<T: Config>(acc: &T::AccountId) -> RawOrigin<T::AccountId> {
	RawOrigin::Signed(acc.clone())
}

fn deadline<T: Config>() -> Moment {
	SimpleSwap::<T>::now() + 60
}

/// Register both tokens, endow `who` and let the engine spend the endowment
fn setup_tokens<T: Config>(who: &T::AccountId) {
	let engine = SimpleSwap::<T>::account_id();
	for asset_id in [TOKEN_A, TOKEN_B] {
		if !T::MultiCurrency::asset_exists(asset_id) {
			assert_ok!(T::MultiCurrency::create(asset_id, who.clone(), true, 1));
		}
		assert_ok!(T::MultiCurrency::mint_into(asset_id, who, ENDOWMENT));
		assert_ok!(<T::MultiCurrency as approvals::Mutate<T::AccountId>>::approve(
			asset_id, who, &engine, ENDOWMENT
		));
	}
}

fn seed_pool<T: Config>(who: &T::AccountId) -> Balance {
	let (_, _, shares) = SimpleSwap::<T>::do_add_liquidity(
		who,
		TOKEN_A,
		TOKEN_B,
		100_000,
		200_000,
		0,
		0,
		who.clone(),
		deadline::<T>(),
	)
	.unwrap();
	shares
}

benchmarks! {
	// first deposit, creating the pool and its share token
	add_liquidity {
		let alice = account::<T>("Alice");
		setup_tokens::<T>(&alice);
		let amount_a: Balance = 100_000;
		let amount_b: Balance = 200_000;
	}: _(origin::<T>(&alice), TOKEN_A, TOKEN_B, amount_a, amount_b, amount_a, amount_b, None, deadline::<T>())
	verify {
		assert_eq!(SimpleSwap::<T>::get_liquidity(TOKEN_A, TOKEN_B), (amount_a, amount_b));
		assert_eq!(SimpleSwap::<T>::share_balance(TOKEN_A, TOKEN_B, &alice), amount_a);
	}

	remove_liquidity {
		let alice = account::<T>("Alice");
		setup_tokens::<T>(&alice);
		let shares = seed_pool::<T>(&alice);
	}: _(origin::<T>(&alice), TOKEN_A, TOKEN_B, shares / 2, 1, 1, None, deadline::<T>())
	verify {
		assert_eq!(SimpleSwap::<T>::share_balance(TOKEN_A, TOKEN_B, &alice), shares - shares / 2);
	}

	swap_exact_tokens_for_tokens {
		let alice = account::<T>("Alice");
		setup_tokens::<T>(&alice);
		seed_pool::<T>(&alice);

		let path = vec![TOKEN_A, TOKEN_B];
		let amount_in: Balance = 100;
		let amount_out_min: Balance = 10;
		let before_balance = T::MultiCurrency::balance(TOKEN_A, &alice);
	}: _(origin::<T>(&alice), amount_in, amount_out_min, path, None, deadline::<T>())
	verify {
		let after_balance = T::MultiCurrency::balance(TOKEN_A, &alice);
		assert_eq!(after_balance, before_balance - amount_in);
	}

	impl_benchmark_test_suite!(SimpleSwap, crate::mock::new_bench_ext(), crate::mock::Test,);
}
