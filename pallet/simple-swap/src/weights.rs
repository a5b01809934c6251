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

//! Weights for pallet_simple_swap
//!
//! Storage access counts follow the dispatchables: each touches `Pools`, both asset balances and
//! approvals of the caller, and the share token. Pool creation adds `NextShareTokenId` and the
//! share token's asset record.
//!
//! The base weights below are hand-set placeholders, not benchmark output. Replace this file
//! with the output of the `runtime-benchmarks` suite before using the pallet on a live chain.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_simple_swap.
pub trait WeightInfo {
	fn add_liquidity() -> Weight;
	fn remove_liquidity() -> Weight;
	fn swap_exact_tokens_for_tokens() -> Weight;
}

/// Weights for pallet_simple_swap using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: SimpleSwap Pools (r:1 w:1)
	// Storage: SimpleSwap NextShareTokenId (r:1 w:1)
	// Storage: Assets Asset (r:3 w:3)
	// Storage: Assets Account (r:6 w:6)
	// Storage: Assets Approvals (r:2 w:2)
	// Storage: System Account (r:1 w:1)
	fn add_liquidity() -> Weight {
		Weight::from_all(142_000_000)
			.saturating_add(T::DbWeight::get().reads(14 as u64))
			.saturating_add(T::DbWeight::get().writes(14 as u64))
	}
	// Storage: SimpleSwap Pools (r:1 w:1)
	// Storage: Assets Asset (r:3 w:3)
	// Storage: Assets Account (r:5 w:5)
	// Storage: System Account (r:1 w:1)
	fn remove_liquidity() -> Weight {
		Weight::from_all(118_000_000)
			.saturating_add(T::DbWeight::get().reads(10 as u64))
			.saturating_add(T::DbWeight::get().writes(10 as u64))
	}
	// Storage: SimpleSwap Pools (r:1 w:1)
	// Storage: Assets Asset (r:2 w:2)
	// Storage: Assets Account (r:4 w:4)
	// Storage: Assets Approvals (r:1 w:1)
	// Storage: System Account (r:1 w:1)
	fn swap_exact_tokens_for_tokens() -> Weight {
		Weight::from_all(96_000_000)
			.saturating_add(T::DbWeight::get().reads(9 as u64))
			.saturating_add(T::DbWeight::get().writes(9 as u64))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn add_liquidity() -> Weight {
		Weight::from_all(142_000_000)
			.saturating_add(RocksDbWeight::get().reads(14 as u64))
			.saturating_add(RocksDbWeight::get().writes(14 as u64))
	}
	fn remove_liquidity() -> Weight {
		Weight::from_all(118_000_000)
			.saturating_add(RocksDbWeight::get().reads(10 as u64))
			.saturating_add(RocksDbWeight::get().writes(10 as u64))
	}
	fn swap_exact_tokens_for_tokens() -> Weight {
		Weight::from_all(96_000_000)
			.saturating_add(RocksDbWeight::get().reads(9 as u64))
			.saturating_add(RocksDbWeight::get().writes(9 as u64))
	}
}
