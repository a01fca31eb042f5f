//! Plan 9 layout rooted at `$home/lib`.

use std::path::PathBuf;

use super::{DirectoryProvider, Platform, home_from};
use crate::env::{self, EnvResolver, Environment};
use crate::resolved::{BaseDirectories, UserDirectories};

#[derive(Debug, Clone, Copy, Default)]
pub struct Plan9Provider;

impl DirectoryProvider for Plan9Provider {
    fn platform(&self) -> Platform {
        Platform::Plan9
    }

    fn home(&self, env: &dyn Environment) -> PathBuf {
        home_from(env, "home", "/")
    }

    fn base_dirs(&self, resolver: EnvResolver<'_>) -> BaseDirectories {
        let home = resolver.home();
        let lib = home.join("lib");

        BaseDirectories {
            data_home: resolver.dir(env::DATA_HOME, &lib),
            data_dirs: resolver.dir_list(env::DATA_DIRS, ["/lib"]),
            config_home: resolver.dir(env::CONFIG_HOME, &lib),
            config_dirs: resolver.dir_list(env::CONFIG_DIRS, ["/lib"]),
            state_home: resolver.dir(env::STATE_HOME, lib.join("state")),
            cache_home: resolver.dir(env::CACHE_HOME, lib.join("cache")),
            runtime_dir: resolver.dir(env::RUNTIME_DIR, "/tmp"),
            application_dirs: vec![home.join("bin"), PathBuf::from("/bin")],
            font_dirs: vec![lib.join("font"), PathBuf::from("/lib/font")],
        }
    }

    fn user_dirs(&self, resolver: EnvResolver<'_>, _base: &BaseDirectories) -> UserDirectories {
        let home = resolver.home();

        UserDirectories {
            desktop: resolver.dir(env::DESKTOP_DIR, home.join("desktop")),
            download: resolver.dir(env::DOWNLOAD_DIR, home.join("downloads")),
            documents: resolver.dir(env::DOCUMENTS_DIR, home.join("documents")),
            music: resolver.dir(env::MUSIC_DIR, home.join("music")),
            pictures: resolver.dir(env::PICTURES_DIR, home.join("pictures")),
            videos: resolver.dir(env::VIDEOS_DIR, home.join("videos")),
            templates: resolver.dir(env::TEMPLATES_DIR, home.join("templates")),
            public_share: resolver.dir(env::PUBLICSHARE_DIR, home.join("public")),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn lib_layout() {
        let env = MapEnv::new().with("home", "/usr/glenda");
        let dirs = Plan9Provider.resolve(&env);

        assert_eq!(dirs.home, PathBuf::from("/usr/glenda"));
        assert_eq!(dirs.base.data_home, PathBuf::from("/usr/glenda/lib"));
        assert_eq!(dirs.base.config_dirs, vec![PathBuf::from("/lib")]);
        assert_eq!(dirs.base.state_home, PathBuf::from("/usr/glenda/lib/state"));
        assert_eq!(dirs.base.cache_home, PathBuf::from("/usr/glenda/lib/cache"));
        assert_eq!(dirs.base.runtime_dir, PathBuf::from("/tmp"));
        assert_eq!(dirs.user.download, PathBuf::from("/usr/glenda/downloads"));
    }
}
