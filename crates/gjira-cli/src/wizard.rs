//! Interactive first-run configuration.
//!
//! Collects the four settings fields from stdin, re-prompting until each
//! is valid, then writes the whole store in one call. Existing values are
//! offered as defaults; the password is always asked fresh.

use crate::output;
use anyhow::{bail, Context};
use gjira_core::Settings;
use std::io::{BufRead, Write};

pub fn run(existing: Option<&Settings>) -> anyhow::Result<Settings> {
    let stdin = std::io::stdin();
    let settings = collect(&mut stdin.lock(), existing)?;
    settings.save().context("failed to save settings")?;
    output::success("Config saved");
    Ok(settings)
}

fn collect(input: &mut impl BufRead, existing: Option<&Settings>) -> anyhow::Result<Settings> {
    let current = existing.cloned().unwrap_or_default();

    let host = prompt(
        input,
        "Tracker host (e.g. jira.example.com)",
        default_for(&current.host),
        validate_host,
    )?;
    let username = prompt(
        input,
        "Tracker username",
        default_for(&current.username),
        required("username"),
    )?;
    let password = prompt(input, "Tracker password", None, required("password"))?;
    let default_branch = prompt(
        input,
        "Default git branch",
        default_for(&current.default_branch),
        required("branch name"),
    )?;

    Ok(Settings {
        host,
        username,
        password,
        default_branch,
        allow_insecure_tls: current.allow_insecure_tls,
    })
}

fn default_for(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn prompt<V>(
    input: &mut impl BufRead,
    message: &str,
    default: Option<&str>,
    validate: V,
) -> anyhow::Result<String>
where
    V: Fn(&str) -> std::result::Result<(), String>,
{
    loop {
        match default {
            Some(d) => print!("{message} [{d}]: "),
            None => print!("{message}: "),
        }
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            bail!("configuration aborted: stdin closed");
        }

        let mut value = line.trim();
        if value.is_empty() {
            if let Some(d) = default {
                value = d;
            }
        }

        match validate(value) {
            Ok(()) => return Ok(value.to_owned()),
            Err(msg) => output::warn(&msg),
        }
    }
}

fn validate_host(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("please enter the tracker host".into());
    }
    // Host, not a path: "jira.example.com", never "/jira".
    if value.starts_with('/') {
        return Err("host must not start with '/'".into());
    }
    Ok(())
}

fn required(field: &'static str) -> impl Fn(&str) -> std::result::Result<(), String> {
    move |value| {
        if value.is_empty() {
            Err(format!("please enter a {field}"))
        } else {
            Ok(())
        }
    }
}
