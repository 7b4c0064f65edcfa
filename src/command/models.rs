//! `cargo localver models` — fetch and cache model identifiers.
//!
//! Pulls the provider index from models.dev, extracts model ids for a fixed
//! provider list, and caches the compact result as JSON. The cached payload
//! is reused until its TTL expires unless `--refresh` is given. This is the
//! only network client in the tool; everything else is local file I/O.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

const API_URL: &str = "https://models.dev/api.json";
const DEFAULT_TTL_SECONDS: u64 = 60 * 60 * 24;

/// Provider ids we care about; keys into api.json.
const TARGET_PROVIDERS: &[&str] = &[
    "github-copilot",
    "zai",
    "zhipuai",
    "zai-coding-plan",
    "zhipuai-coding-plan",
    "opencode",
];

#[derive(Parser, Debug, Clone)]
pub struct ModelsArgs {
    /// Ignore the cache and refetch
    #[arg(long)]
    pub refresh: bool,

    /// Output JSON path
    #[arg(long, value_name = "PATH", default_value = ".cache/models.dev.json")]
    pub out: PathBuf,

    /// Cache TTL in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TTL_SECONDS)]
    pub ttl: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsCache {
    pub source: String,
    #[serde(rename = "fetchedAt")]
    pub fetched_at: u64,
    pub providers: BTreeMap<String, ProviderModels>,
    #[serde(rename = "allModelIds")]
    pub all_model_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderModels {
    #[serde(rename = "modelIds")]
    pub model_ids: Vec<String>,
}

pub fn execute(args: ModelsArgs) -> Result<()> {
    let now = unix_now();

    if !args.refresh
        && let Some(cache) = read_cache(&args.out)
        && is_fresh(&cache, now, args.ttl)
    {
        log::debug!("cache at {} is fresh, skipping fetch", args.out.display());
        println!("{}", serde_json::to_string_pretty(&cache)?);
        return Ok(());
    }

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("cargo-localver/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .build()?;
    let body = client.get(API_URL).send()?.error_for_status()?.text()?;
    let api: Value = serde_json::from_str(&body)?;

    let mut providers = BTreeMap::new();
    let mut all_ids = Vec::new();
    for provider in TARGET_PROVIDERS {
        let ids = extract_model_ids(api.get(*provider));
        all_ids.extend(ids.iter().cloned());
        providers.insert(provider.to_string(), ProviderModels { model_ids: ids });
    }

    let cache = ModelsCache {
        source: "models.dev".to_string(),
        fetched_at: now,
        providers,
        all_model_ids: dedupe(all_ids),
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut payload = serde_json::to_string_pretty(&cache)?;
    payload.push('\n');
    crate::fs::replace_file(&args.out, &payload)?;
    log::info!("cached {} model ids to {}", cache.all_model_ids.len(), args.out.display());

    println!("{}", serde_json::to_string_pretty(&cache)?);
    Ok(())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn read_cache(path: &PathBuf) -> Option<ModelsCache> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

fn is_fresh(cache: &ModelsCache, now: u64, ttl: u64) -> bool {
    cache.fetched_at != 0 && now.saturating_sub(cache.fetched_at) < ttl
}

/// Pulls plausible model id strings out of a provider payload.
///
/// api.json uses `models` as either a list of model objects or a map of
/// model id to payload; both shapes are accepted, and the first of the
/// `id` / `name` / `model` fields present wins per entry.
fn extract_model_ids(provider_payload: Option<&Value>) -> Vec<String> {
    let Some(models) = provider_payload.and_then(|p| p.get("models")) else {
        return Vec::new();
    };

    let entries: Vec<&Value> = match models {
        Value::Array(list) => list.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    };

    let mut ids = Vec::new();
    for entry in entries {
        if !entry.is_object() {
            continue;
        }
        for key in ["id", "name", "model"] {
            if let Some(v) = entry.get(key).and_then(Value::as_str)
                && !v.is_empty()
            {
                ids.push(v.to_string());
                break;
            }
        }
    }

    dedupe(ids)
}

/// De-dupes while preserving first-seen order.
fn dedupe(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
