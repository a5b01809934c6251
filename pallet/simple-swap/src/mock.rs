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

use crate as pallet_simple_swap;
use simple_swap_pallet_common::test_prelude::*;

construct_runtime!(
	pub enum Test {
		System: frame_system,
		Balances: pallet_balances,
		Assets: pallet_assets,
		Timestamp: pallet_timestamp,
		SimpleSwap: pallet_simple_swap,
	}
);

impl_frame_system_config!(Test);
impl_pallet_balance_config!(Test);
impl_pallet_assets_config!(Test);
impl_pallet_timestamp_config!(Test);
impl_pallet_simple_swap_config!(Test);

/// Move the wall clock forward by `seconds`
pub fn advance_time(seconds: Moment) {
	let now = Timestamp::get();
	Timestamp::set_timestamp(now + seconds * 1_000);
}

/// Externalities for the benchmark test suite, the bench account pays approval deposits
#[cfg(feature = "runtime-benchmarks")]
pub fn new_bench_ext() -> sp_io::TestExternalities {
	let bench_account: AccountId = frame_benchmarking::account("Alice", 0, 0);
	TestExt::<Test>::default()
		.with_balances(&[(bench_account, NATIVE_ENDOWMENT)])
		.build()
}
