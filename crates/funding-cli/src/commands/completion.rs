// Dweve Funding Lens - Startup Funding Analytics
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write the completion script for `cmd` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::shells::Bash;
/// use funding_cli::commands::generate_completion_for_command;
///
/// # fn main() -> Result<(), String> {
/// let mut cmd = Command::new("funding");
/// generate_completion_for_command(Bash, &mut cmd)?;
/// # Ok(())
/// # }
/// ```
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), String> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}

/// Installation instructions for the completion script of `shell`.
///
/// Shell names are case-insensitive. Unknown shells yield
/// `"Unsupported shell"`.
///
/// # Examples
///
/// ```
/// use funding_cli::commands::print_installation_instructions;
///
/// assert!(print_installation_instructions("zsh").contains("~/.zshrc"));
/// assert_eq!(print_installation_instructions("tcsh"), "Unsupported shell");
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    let shell = shell.to_lowercase();
    let (session, profile, saved) = match shell.as_str() {
        "bash" => (
            r#"eval "$(funding completion bash)""#,
            "~/.bashrc",
            Some("funding completion bash > ~/.local/share/bash-completion/completions/funding"),
        ),
        "zsh" => (
            r#"eval "$(funding completion zsh)""#,
            "~/.zshrc",
            Some("funding completion zsh > ~/.zsh/completions/_funding"),
        ),
        "fish" => (
            "funding completion fish | source",
            "~/.config/fish/config.fish",
            Some("funding completion fish > ~/.config/fish/completions/funding.fish"),
        ),
        "powershell" | "pwsh" => (
            "funding completion powershell | Out-String | Invoke-Expression",
            "$PROFILE",
            None,
        ),
        "elvish" => ("eval (funding completion elvish)", "~/.elvish/rc.elv", None),
        _ => return "Unsupported shell".to_string(),
    };

    let mut text = format!(
        "# {shell} completion installation:\n\n\
         # For current session only:\n{session}\n\n\
         # For persistent installation, add this line to {profile}:\n{session}\n"
    );
    if let Some(saved) = saved {
        text.push_str(&format!("\n# Or save to the completions directory:\n{saved}\n"));
    }
    text
}
