//! End-to-end resolution through the public API with fixed environments.

#![cfg(unix)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xdgdirs_core::{
    DirectoryProvider, Directories, DirsError, MacOsProvider, MapEnv, Plan9Provider, Role,
    UserDir, XdgProvider, parse_config, unique_paths,
};

fn alice() -> MapEnv {
    MapEnv::new().with("HOME", "/home/alice")
}

#[test]
fn config_home_defaults_under_home() {
    let dirs = XdgProvider::new().resolve(&alice());
    assert_eq!(dirs.config_home(), Path::new("/home/alice/.config"));
    assert_eq!(dirs.data_home(), Path::new("/home/alice/.local/share"));
    assert_eq!(dirs.cache_home(), Path::new("/home/alice/.cache"));
    assert_eq!(dirs.config_dirs(), &[PathBuf::from("/etc/xdg")]);
}

#[test]
fn relative_override_is_ignored() {
    let env = alice().with("XDG_CACHE_HOME", "relative/cache");
    let dirs = XdgProvider::new().resolve(&env);
    assert_eq!(dirs.cache_home(), Path::new("/home/alice/.cache"));
}

#[test]
fn data_dirs_are_deduplicated_in_order() {
    let env = alice().with("XDG_DATA_DIRS", "/a:/b:/a");
    let dirs = XdgProvider::new().resolve(&env);
    assert_eq!(dirs.data_dirs(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
}

#[test]
fn all_relative_list_falls_back_to_defaults() {
    let env = alice().with("XDG_DATA_DIRS", "share:other");
    let dirs = XdgProvider::new().resolve(&env);
    assert_eq!(
        dirs.data_dirs(),
        &[PathBuf::from("/usr/local/share"), PathBuf::from("/usr/share")]
    );
}

#[test]
fn unique_paths_drops_empty_relative_and_repeats() {
    let out = unique_paths(["", "/a", "/a/b", "rel", "/a"], Path::new("/a/b"));
    assert_eq!(out, vec![PathBuf::from("/a"), PathBuf::from("/a/b")]);
}

#[test]
fn user_dirs_file_lines() {
    let contents = "\
# XDG_PICTURES_DIR=\"$HOME/Pictures\"
XDG_DOWNLOAD_DIR
XDG_DOWNLOAD_DIR=\"$HOME/Downloads\"
";
    let config = parse_config(Cursor::new(contents), Path::new("/home/alice")).unwrap();

    assert_eq!(
        config.get(UserDir::Download),
        Some(Path::new("/home/alice/Downloads"))
    );
    assert_eq!(config.get(UserDir::Pictures), None);
    assert_eq!(config.len(), 1);
}

#[test]
fn user_dirs_file_feeds_resolution() {
    let root = TempDir::new().unwrap();
    let home = root.path();
    fs::create_dir_all(home.join(".config")).unwrap();
    fs::write(
        home.join(".config/user-dirs.dirs"),
        "XDG_MUSIC_DIR=\"$HOME/Media/Music\"\nXDG_DESKTOP_DIR=\"$HOME/\"\n",
    )
    .unwrap();

    let env = MapEnv::new()
        .with("HOME", &home.to_string_lossy())
        .with("XDG_VIDEOS_DIR", "/srv/videos");
    let dirs = XdgProvider::new().resolve(&env);
    let user = dirs.user_dirs();

    assert_eq!(user.get(UserDir::Music), home.join("Media/Music"));
    assert_eq!(user.get(UserDir::Desktop), home);
    assert_eq!(user.get(UserDir::Videos), Path::new("/srv/videos"));
    assert_eq!(user.get(UserDir::Documents), home.join("Documents"));
}

#[test]
fn create_and_search_round_trip() {
    let root = TempDir::new().unwrap();
    let env = MapEnv::new()
        .with("HOME", &root.path().join("home").to_string_lossy())
        .with("XDG_DATA_DIRS", &root.path().join("share").to_string_lossy());
    let dirs = Directories::with_provider(Box::new(XdgProvider::new()), Box::new(env));

    let path = dirs.create_file(Role::Data, "appname/app.data").unwrap();
    assert_eq!(path, root.path().join("home/.local/share/appname/app.data"));
    assert!(matches!(
        dirs.search_file(Role::Data, "appname/app.data"),
        Err(DirsError::NotFound { .. })
    ));

    fs::write(&path, b"payload").unwrap();
    assert_eq!(dirs.search_file(Role::Data, "appname/app.data").unwrap(), path);
}

#[test]
fn not_found_lists_every_searched_directory() {
    let root = TempDir::new().unwrap();
    let env = MapEnv::new()
        .with("HOME", &root.path().join("home").to_string_lossy())
        .with("XDG_CONFIG_DIRS", &root.path().join("etc").to_string_lossy());
    let dirs = XdgProvider::new().resolve(&env);

    let err = dirs.search_config_file("app/app.toml").unwrap_err();
    assert_eq!(
        err.attempted(),
        &[
            root.path().join("home/.config/app"),
            root.path().join("etc/app"),
        ]
    );
}

#[test]
fn display_and_json_agree() {
    let dirs = XdgProvider::new().resolve(&alice().with("XDG_RUNTIME_DIR", "/run/user/1000"));

    let text = dirs.to_string();
    assert!(text.lines().any(|l| l == "config_home = /home/alice/.config"));
    assert!(text.lines().any(|l| l == "runtime_dir = /run/user/1000"));

    let json = serde_json::to_value(&dirs).unwrap();
    assert_eq!(json["platform"], "xdg");
    assert_eq!(json["base"]["config_home"], "/home/alice/.config");
    assert_eq!(json["user"]["download"], "/home/alice/Downloads");
}

#[test]
fn other_layouts_resolve_from_their_own_home() {
    let mac = MacOsProvider.resolve(&MapEnv::new().with("HOME", "/Users/alice"));
    assert_eq!(mac.cache_home(), Path::new("/Users/alice/Library/Caches"));
    assert_eq!(mac.user_dirs().get(UserDir::Videos), Path::new("/Users/alice/Movies"));

    let plan9 = Plan9Provider.resolve(&MapEnv::new().with("home", "/usr/glenda"));
    assert_eq!(plan9.home(), Path::new("/usr/glenda"));
    assert_eq!(plan9.runtime_dir(), Path::new("/tmp"));
}
