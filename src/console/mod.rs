// Copyright 2026 BadCompany
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

pub mod input;
pub mod output;

pub use input::{
    collect_masked, input, input_from, input_with_prompt, input_with_prompt_from,
    input_with_promptln, input_with_promptln_from, private_input, private_input_with_prompt,
    private_input_with_promptln,
};
pub use output::{
    output, output_to, outputln, outputln_to, silent_output, silent_output_to, silent_outputln,
    silent_outputln_to,
};
