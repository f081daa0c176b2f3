use crate::releases::types::{Installs, ReleaseInfo, SourceRelease};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Win32,
    Darwin,
    Linux,
}

const LINUX_SUFFIXES: &[&str] = &[".deb", "linux-ia32.zip", "linux-x64.zip"];

/// Which platform an installer asset is for, by file name.
///
/// Anything that isn't an installer (checksums, update feeds, portable
/// builds) counts for no platform.
pub fn classify_asset(name: &str) -> Option<Platform> {
    if name.ends_with(".dmg") {
        Some(Platform::Darwin)
    } else if name.ends_with(".exe") {
        Some(Platform::Win32)
    } else if LINUX_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        Some(Platform::Linux)
    } else {
        None
    }
}

impl From<SourceRelease> for ReleaseInfo {
    fn from(release: SourceRelease) -> Self {
        let mut installs = Installs::default();

        for asset in &release.assets {
            match classify_asset(&asset.name) {
                Some(Platform::Darwin) => installs.darwin += asset.download_count,
                Some(Platform::Win32) => installs.win32 += asset.download_count,
                Some(Platform::Linux) => installs.linux += asset.download_count,
                None => {}
            }
        }
        installs.total = installs.win32 + installs.darwin + installs.linux;

        ReleaseInfo {
            tag_name: release.tag_name,
            published_at: release.published_at,
            installs,
        }
    }
}

pub fn total_installs(releases: &[ReleaseInfo]) -> Installs {
    releases.iter().fold(Installs::default(), |mut acc, r| {
        acc += r.installs;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::releases::types::ReleaseAsset;
    use pretty_assertions::assert_eq;

    fn asset(name: &str, download_count: u64) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            download_count,
        }
    }

    #[test]
    fn classifies_installers_by_suffix() {
        assert_eq!(classify_asset("WebTorrent-v0.17.0.dmg"), Some(Platform::Darwin));
        assert_eq!(classify_asset("WebTorrentSetup-v0.17.0.exe"), Some(Platform::Win32));
        assert_eq!(classify_asset("webtorrent-desktop_0.17.0-1_amd64.deb"), Some(Platform::Linux));
        assert_eq!(classify_asset("WebTorrent-v0.17.0-linux-x64.zip"), Some(Platform::Linux));
        assert_eq!(classify_asset("WebTorrent-v0.17.0-linux-ia32.zip"), Some(Platform::Linux));
    }

    #[test]
    fn ignores_non_installer_assets() {
        assert_eq!(classify_asset("RELEASES"), None);
        assert_eq!(classify_asset("WebTorrent-v0.17.0-full.nupkg"), None);
        assert_eq!(classify_asset("WebTorrent-v0.17.0-darwin.zip"), None);
        assert_eq!(classify_asset("WebTorrent-v0.17.0-win.zip"), None);
    }

    #[test]
    fn release_installs_sum_by_platform() {
        // Arrange
        let release = SourceRelease {
            tag_name: "v0.17.0".to_string(),
            published_at: Some("2016-10-04T02:48:32Z".to_string()),
            assets: vec![
                asset("WebTorrent-v0.17.0.dmg", 100),
                asset("WebTorrentSetup-v0.17.0.exe", 250),
                asset("webtorrent-desktop_0.17.0-1_amd64.deb", 30),
                asset("WebTorrent-v0.17.0-linux-x64.zip", 20),
                asset("RELEASES", 9999),
            ],
        };

        // Act
        let info = ReleaseInfo::from(release);

        // Assert
        assert_eq!(
            info.installs,
            Installs {
                win32: 250,
                darwin: 100,
                linux: 50,
                total: 400,
            }
        );
        assert_eq!(info.tag_name, "v0.17.0");
    }

    #[test]
    fn totals_add_up_across_releases() {
        let releases = vec![
            ReleaseInfo::from(SourceRelease {
                tag_name: "v0.16.0".to_string(),
                published_at: None,
                assets: vec![asset("a.dmg", 5), asset("a.exe", 7)],
            }),
            ReleaseInfo::from(SourceRelease {
                tag_name: "v0.17.0".to_string(),
                published_at: None,
                assets: vec![asset("a.deb", 3), asset("a.exe", 1)],
            }),
        ];

        assert_eq!(
            total_installs(&releases),
            Installs {
                win32: 8,
                darwin: 5,
                linux: 3,
                total: 16,
            }
        );
    }

    #[test]
    fn parses_github_release_listing() {
        let json = r#"[{"tag_name":"v0.17.0","published_at":"2016-10-04T02:48:32Z","draft":false,
            "assets":[{"name":"WebTorrent-v0.17.0.dmg","download_count":12,"size":1}]}]"#;

        let releases: Vec<SourceRelease> = serde_json::from_str(json).unwrap();

        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].assets[0].download_count, 12);
        assert_eq!(
            releases[0].published_at.as_deref(),
            Some("2016-10-04T02:48:32Z")
        );
    }
}
