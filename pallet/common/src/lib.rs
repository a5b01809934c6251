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

//! shared pallet helpers and test tooling
#![cfg_attr(not(feature = "std"), no_std)]

pub use log as logger;

#[cfg(feature = "std")]
pub mod test_utils;
#[cfg(feature = "std")]
pub use test_utils::test_prelude;

/// syntactic sugar for logging.
/// the caller must define a constant `LOG_TARGET = "<my-target>"`
#[macro_export]
macro_rules! log {
	($level:tt, $patter:expr $(, $values:expr)* $(,)?) => {
		$crate::logger::$level!(
			target: crate::LOG_TARGET,
			$patter $(, $values)*
		)
	};
}
