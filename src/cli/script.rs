//! Shell registration script generation for tabpick
//!
//! This module prints the script that wires tabpick into a shell's
//! completion subsystem: the static clap completion for the tool's own
//! flags and subcommands, followed by a dynamic function that invokes the
//! helper with `COMP_WORDS`/`EVAL_WORDS`/`COMP_CWORD` set and splits the
//! BEL-joined reply back into suggestions.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};

/// Generate the registration script for a shell
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_script(shell_name: &str) -> Result<()> {
    match parse_shell(shell_name)? {
        Shell::Bash => print!("{}", bash_script()),
        Shell::Zsh => print!("{}", zsh_script()),
        Shell::Fish => print!("{}", fish_script()),
        _ => return Err(ConfigError::UnsupportedShell(shell_name.to_string()).into()),
    }
    Ok(())
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(ConfigError::UnsupportedShell(shell_name.to_string()).into()),
    }
}

/// Static clap completion for the tool itself, as a string
fn base_completion(shell: Shell) -> String {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, "tabpick", &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Bash registration script with dynamic candidate completion
fn bash_script() -> String {
    format!(
        r#"{}

# Dynamic candidate completion over the BEL-delimited protocol
_tabpick_candidates() {{
    local IFS=$'\a'
    COMPREPLY=( $(COMP_WORDS="${{COMP_WORDS[*]}}" \
        COMP_CWORD="$COMP_CWORD" \
        EVAL_WORDS="" \
        tabpick 2>/dev/null) )
}}

# Replace the completion function
complete -F _tabpick_candidates tabpick
"#,
        base_completion(Shell::Bash)
    )
}

/// Zsh registration script with dynamic candidate completion
fn zsh_script() -> String {
    format!(
        r#"{}

# Dynamic candidate completion over the BEL-delimited protocol
_tabpick_candidates() {{
    local -a suggestions
    local reply
    reply=$(COMP_WORDS="${{(pj:\a:)words}}" \
        COMP_CWORD=$((CURRENT - 1)) \
        EVAL_WORDS="" \
        tabpick 2>/dev/null)
    suggestions=(${{(ps:\a:)reply}})
    compadd -- $suggestions
}}

# Replace the completion function
compdef _tabpick_candidates tabpick
"#,
        base_completion(Shell::Zsh)
    )
}

/// Fish registration script with dynamic candidate completion
fn fish_script() -> String {
    format!(
        r#"{}

# Dynamic candidate completion over the BEL-delimited protocol
function __tabpick_candidates
    set -l tokens (commandline -opc) (commandline -ct)
    set -l joined (string join \a -- $tokens)
    set -l index (math (count $tokens) - 1)
    COMP_WORDS=$joined COMP_CWORD=$index EVAL_WORDS= tabpick 2>/dev/null | string split \a
end

complete -c tabpick -f -a "(__tabpick_candidates)"
"#,
        base_completion(Shell::Fish)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("fish"), Ok(Shell::Fish)));
        assert!(parse_shell("powershell").is_err());
        assert!(parse_shell("").is_err());
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert!(matches!(parse_shell("BASH"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("Zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("FiSh"), Ok(Shell::Fish)));
    }

    #[test]
    fn test_bash_script_registers_dynamic_function() {
        let script = bash_script();
        assert!(script.contains("_tabpick_candidates"));
        assert!(script.contains("COMP_WORDS"));
        assert!(script.contains("EVAL_WORDS"));
        assert!(script.contains("complete -F _tabpick_candidates tabpick"));
    }

    #[test]
    fn test_zsh_script_registers_dynamic_function() {
        let script = zsh_script();
        assert!(script.contains("COMP_CWORD=$((CURRENT - 1))"));
        assert!(script.contains("compdef _tabpick_candidates tabpick"));
    }

    #[test]
    fn test_fish_script_registers_dynamic_function() {
        let script = fish_script();
        assert!(script.contains("__tabpick_candidates"));
        assert!(script.contains("string split"));
        assert!(script.contains("complete -c tabpick"));
    }

    #[test]
    fn test_scripts_include_static_clap_completion() {
        // The clap-generated prelude completes the tool's own subcommands
        assert!(bash_script().contains("script"));
        assert!(bash_script().contains("version"));
    }
}
