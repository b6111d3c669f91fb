//! Print an article's detail fragment or social preview

use anyhow::Result;

use crate::helpers::decode_component;
use crate::Site;

/// Fetch an article and print its HTML
///
/// `target` may still be percent-encoded (copied from a URL). With `share`
/// set, the full social preview document is printed instead of the fragment.
pub async fn run(site: &Site, target: &str, share: bool) -> Result<()> {
    let target = decode_component(target);

    let html = if share {
        site.share_document(&target, None).await?
    } else {
        site.article_fragment(&target).await?
    };

    match html {
        Some(html) => println!("{}", html),
        None => anyhow::bail!("Article not found: {}", target),
    }

    Ok(())
}
