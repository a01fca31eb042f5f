//! Apple standard directory layout.

use std::path::PathBuf;

use super::{DirectoryProvider, Platform, home_from};
use crate::env::{self, EnvResolver, Environment};
use crate::resolved::{BaseDirectories, UserDirectories};

const ROOT_APP_SUPPORT: &str = "/Library/Application Support";

#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsProvider;

impl DirectoryProvider for MacOsProvider {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn home(&self, env: &dyn Environment) -> PathBuf {
        home_from(env, "HOME", "/")
    }

    fn base_dirs(&self, resolver: EnvResolver<'_>) -> BaseDirectories {
        let home = resolver.home();
        let library = home.join("Library");
        let app_support = library.join("Application Support");
        let preferences = library.join("Preferences");
        let preferences = preferences.to_string_lossy();

        BaseDirectories {
            data_home: resolver.dir(env::DATA_HOME, &app_support),
            data_dirs: resolver.dir_list(env::DATA_DIRS, [ROOT_APP_SUPPORT]),
            config_home: resolver.dir(env::CONFIG_HOME, &app_support),
            config_dirs: resolver.dir_list(
                env::CONFIG_DIRS,
                [&*preferences, ROOT_APP_SUPPORT, "/Library/Preferences"],
            ),
            state_home: resolver.dir(env::STATE_HOME, &app_support),
            cache_home: resolver.dir(env::CACHE_HOME, library.join("Caches")),
            runtime_dir: resolver.dir(env::RUNTIME_DIR, &app_support),
            application_dirs: vec![PathBuf::from("/Applications")],
            font_dirs: vec![
                library.join("Fonts"),
                PathBuf::from("/Library/Fonts"),
                PathBuf::from("/System/Library/Fonts"),
                PathBuf::from("/Network/Library/Fonts"),
            ],
        }
    }

    fn user_dirs(&self, resolver: EnvResolver<'_>, _base: &BaseDirectories) -> UserDirectories {
        let home = resolver.home();

        UserDirectories {
            desktop: resolver.dir(env::DESKTOP_DIR, home.join("Desktop")),
            download: resolver.dir(env::DOWNLOAD_DIR, home.join("Downloads")),
            documents: resolver.dir(env::DOCUMENTS_DIR, home.join("Documents")),
            music: resolver.dir(env::MUSIC_DIR, home.join("Music")),
            pictures: resolver.dir(env::PICTURES_DIR, home.join("Pictures")),
            videos: resolver.dir(env::VIDEOS_DIR, home.join("Movies")),
            templates: resolver.dir(env::TEMPLATES_DIR, home.join("Templates")),
            public_share: resolver.dir(env::PUBLICSHARE_DIR, home.join("Public")),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn library_layout() {
        let env = MapEnv::new().with("HOME", "/Users/alice");
        let dirs = MacOsProvider.resolve(&env);

        let app_support = PathBuf::from("/Users/alice/Library/Application Support");
        assert_eq!(dirs.base.data_home, app_support);
        assert_eq!(dirs.base.config_home, app_support);
        assert_eq!(dirs.base.state_home, app_support);
        assert_eq!(dirs.base.runtime_dir, app_support);
        assert_eq!(dirs.base.cache_home, PathBuf::from("/Users/alice/Library/Caches"));
        assert_eq!(dirs.base.data_dirs, vec![PathBuf::from(ROOT_APP_SUPPORT)]);
        assert_eq!(
            dirs.base.config_dirs,
            vec![
                PathBuf::from("/Users/alice/Library/Preferences"),
                PathBuf::from(ROOT_APP_SUPPORT),
                PathBuf::from("/Library/Preferences"),
            ]
        );
        assert_eq!(dirs.base.font_dirs.len(), 4);
    }

    #[test]
    fn videos_map_to_movies() {
        let env = MapEnv::new().with("HOME", "/Users/alice");
        let dirs = MacOsProvider.resolve(&env);
        assert_eq!(dirs.user.videos, PathBuf::from("/Users/alice/Movies"));
    }

    #[test]
    fn xdg_variables_still_override() {
        let env = MapEnv::new()
            .with("HOME", "/Users/alice")
            .with(env::CONFIG_HOME, "~/.config");
        let dirs = MacOsProvider.resolve(&env);
        assert_eq!(dirs.base.config_home, PathBuf::from("/Users/alice/.config"));
    }
}
