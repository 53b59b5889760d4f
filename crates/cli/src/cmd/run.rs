//! Feed a mouse script through the filter

use anyhow::{Context, Result};
use pauseclick_core::settings::DOUBLE_CLICK_DELAY_RANGE;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;

use crate::host::{status_name, Host};
use crate::script::parse_line;
use crate::system_config;

pub async fn run(script: Option<PathBuf>, settings: Option<&Path>) -> Result<()> {
    let settings_path = system_config::resolve_path(settings)?;
    let config = system_config::load_from(&settings_path)?;
    let store = Arc::new(config.to_store()?);

    let text = read_script(script.as_deref()).await?;
    let mut host = Host::open(store)?;

    for (index, line) in text.lines().enumerate() {
        let command = parse_line(line).with_context(|| format!("Script line {}", index + 1))?;
        if let Some(command) = command {
            host.apply(command)
                .await
                .with_context(|| format!("Script line {}", index + 1))?;
        }
    }

    // Let a trailing single click play out before reporting
    let limit = Duration::from_millis(*DOUBLE_CLICK_DELAY_RANGE.end() as u64 + 500);
    host.settle(limit).await;

    let (toggles, status) = host.close();
    println!("toggles: {}", toggles);
    println!("state: {}", status_name(status));

    Ok(())
}

async fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}
