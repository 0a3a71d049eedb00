use std::fs;

use bytesize::ByteSize;
use failure::ResultExt;

use crate::config::Config;
use crate::layout::Layout;

/// Copy every configured asset from the project root into each output tree
///
/// Returns the total number of bytes written.
pub fn copy_assets(layout: &Layout, config: &Config) -> Result<u64, failure::Error> {
    let mut total = 0;

    for asset in &config.assets {
        let source = layout.root().join(asset);
        let file_name = asset
            .file_name()
            .ok_or_else(|| failure::format_err!("asset {} has no file name", asset.display()))?;

        for tree in layout.trees() {
            let dest = tree.dir().join(file_name);
            let size = fs::copy(&source, &dest).with_context(|_| {
                format!("copying {} to {}", source.display(), dest.display())
            })?;

            debug!(
                "copied {} to {} ({})",
                asset.display(),
                tree.profile(),
                ByteSize(size)
            );
            total += size;
        }
    }

    info!(
        "assets: {} file(s) copied to {} tree(s), {} total",
        config.assets.len(),
        layout.trees().len(),
        ByteSize(total)
    );

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::shader_project;

    #[test]
    fn assets_reach_both_trees() {
        let root = shader_project("assets-copy");
        let config = Config::default();
        let layout = Layout::new(&root, &config);
        layout.ensure().unwrap();

        let total = copy_assets(&layout, &config).unwrap();

        let expected = fs::metadata(root.join("arrow.obj")).unwrap().len()
            + fs::metadata(root.join("arrow.mtl")).unwrap().len();
        assert_eq!(total, 2 * expected);

        for profile in &["debug", "release"] {
            let dir = root.join("target").join(profile);
            assert_eq!(
                fs::read(dir.join("arrow.obj")).unwrap(),
                fs::read(root.join("arrow.obj")).unwrap()
            );
            assert!(dir.join("arrow.mtl").is_file());
        }
    }

    #[test]
    fn missing_asset_is_an_error() {
        let root = shader_project("assets-missing");
        fs::remove_file(root.join("arrow.mtl")).unwrap();

        let config = Config::default();
        let layout = Layout::new(&root, &config);
        layout.ensure().unwrap();

        assert!(copy_assets(&layout, &config).is_err());
    }
}
