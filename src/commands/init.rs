//! Initialize a new site directory

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default `_config.yml` written by `init`
const DEFAULT_CONFIG: &str = r#"# HardYards Configuration

# Site
title: HardYards
description: Read the latest articles and stories from HardYards.
keywords:
  - HardYards articles
  - news stories
  - sports coverage
  - urban stories
  - rural news
  - lifestyle articles
default_author: HardYards Team

# URL
url: https://hardyards.org
default_og_image: /default-og-image.jpg
# path: /post/<slug>, hash: post.html#<slug>
routing: path

# Directory
public_dir: public

# Content API
api:
  project_id: cfblwn37
  dataset: production
  api_version: v2023-07-14
  timeout_secs: 10

# Rendering
features:
  photo_credit: false
render:
  escape_text: false
og_image:
  width: 1200
  height: 630
"#;

/// Initialize a new site in the given directory
///
/// An existing `_config.yml` is left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("public"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::warn!("{:?} already exists, leaving it as is", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        tracing::info!("Wrote {:?}", config_path);
    }

    Ok(())
}
