//! Windows layout built on known folders.
//!
//! Each folder is taken from the shell first, then from the matching
//! environment variables, then computed from home or the system drive.
//! `XDG_*` variables still override the result, as on every platform.

use std::path::{Component, Path, PathBuf};

use super::{DirectoryProvider, KnownFolder, KnownFolderProbe, Platform};
use crate::env::{self, EnvResolver, Environment};
use crate::pathutil::unique_path_bufs;
use crate::resolved::{BaseDirectories, ResolvedDirectories, UserDirectories};

pub struct WindowsProvider {
    probe: Box<dyn KnownFolderProbe>,
}

impl WindowsProvider {
    pub fn new(probe: Box<dyn KnownFolderProbe>) -> Self {
        Self { probe }
    }

    fn folder(
        &self,
        env: &dyn Environment,
        id: KnownFolder,
        vars: &[&str],
        fallback: PathBuf,
    ) -> PathBuf {
        self.probe
            .lookup(id)
            .or_else(|| vars.iter().find_map(|v| absolute_var(env, v)))
            .unwrap_or(fallback)
    }

    fn known_folders(&self, env: &dyn Environment, home: &Path) -> KnownFolders {
        let drive_fallback = volume_of(home).unwrap_or_else(|| PathBuf::from("C:"));
        let drive = env
            .non_empty("SystemDrive")
            .map_or(drive_fallback, PathBuf::from);
        let system_drive = PathBuf::from(format!(
            "{}\\",
            drive.to_string_lossy().trim_end_matches(['\\', '/'])
        ));

        let system_root = self.folder(
            env,
            KnownFolder::Windows,
            &["SystemRoot", "windir"],
            system_drive.join("Windows"),
        );
        let program_data = self.folder(
            env,
            KnownFolder::ProgramData,
            &["ALLUSERSPROFILE", "PROGRAMDATA"],
            system_drive.join("ProgramData"),
        );
        let roaming_app_data = self.folder(
            env,
            KnownFolder::RoamingAppData,
            &["APPDATA"],
            home.join("AppData").join("Roaming"),
        );
        let local_app_data = self.folder(
            env,
            KnownFolder::LocalAppData,
            &["LOCALAPPDATA"],
            home.join("AppData").join("Local"),
        );

        let user = |id, name: &str| self.folder(env, id, &[], home.join(name));
        let desktop = user(KnownFolder::Desktop, "Desktop");
        let downloads = user(KnownFolder::Downloads, "Downloads");
        let documents = user(KnownFolder::Documents, "Documents");
        let music = user(KnownFolder::Music, "Music");
        let pictures = user(KnownFolder::Pictures, "Pictures");
        let videos = user(KnownFolder::Videos, "Videos");

        let start_menu = |root: &Path| {
            root.join("Microsoft")
                .join("Windows")
                .join("Start Menu")
                .join("Programs")
        };

        KnownFolders {
            templates: self.folder(
                env,
                KnownFolder::Templates,
                &[],
                roaming_app_data.join("Microsoft").join("Windows").join("Templates"),
            ),
            public: self.folder(
                env,
                KnownFolder::Public,
                &["PUBLIC"],
                system_drive.join("Users").join("Public"),
            ),
            fonts: self.folder(env, KnownFolder::Fonts, &[], system_root.join("Fonts")),
            programs: self.folder(env, KnownFolder::Programs, &[], start_menu(&roaming_app_data)),
            common_programs: self.folder(
                env,
                KnownFolder::CommonPrograms,
                &[],
                start_menu(&program_data),
            ),
            program_data,
            roaming_app_data,
            local_app_data,
            desktop,
            downloads,
            documents,
            music,
            pictures,
            videos,
        }
    }
}

struct KnownFolders {
    program_data: PathBuf,
    roaming_app_data: PathBuf,
    local_app_data: PathBuf,
    desktop: PathBuf,
    downloads: PathBuf,
    documents: PathBuf,
    music: PathBuf,
    pictures: PathBuf,
    videos: PathBuf,
    templates: PathBuf,
    public: PathBuf,
    fonts: PathBuf,
    programs: PathBuf,
    common_programs: PathBuf,
}

/// Value of `var` as a path, if set and absolute.
fn absolute_var(env: &dyn Environment, var: &str) -> Option<PathBuf> {
    env.non_empty(var)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
}

/// Drive prefix of `path` (`C:`), if it has one.
fn volume_of(path: &Path) -> Option<PathBuf> {
    match path.components().next()? {
        Component::Prefix(prefix) => Some(PathBuf::from(prefix.as_os_str())),
        _ => None,
    }
}

impl DirectoryProvider for WindowsProvider {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn home(&self, env: &dyn Environment) -> PathBuf {
        if let Some(profile) = self.probe.lookup(KnownFolder::Profile) {
            return profile;
        }
        if let Some(profile) = absolute_var(env, "USERPROFILE") {
            return profile;
        }
        if let (Some(drive), Some(path)) = (env.non_empty("HOMEDRIVE"), env.non_empty("HOMEPATH")) {
            let profile = PathBuf::from(format!("{drive}{path}"));
            if profile.is_absolute() {
                return profile;
            }
        }

        let drive = env.non_empty("SystemDrive").unwrap_or_else(|| "C:".to_string());
        PathBuf::from(format!("{}\\", drive.trim_end_matches(['\\', '/'])))
    }

    fn base_dirs(&self, resolver: EnvResolver<'_>) -> BaseDirectories {
        base_dirs_from(resolver, &self.known_folders(resolver.env(), resolver.home()))
    }

    fn user_dirs(&self, resolver: EnvResolver<'_>, _base: &BaseDirectories) -> UserDirectories {
        user_dirs_from(resolver, self.known_folders(resolver.env(), resolver.home()))
    }

    /// Queries the shell once per folder for the whole pass.
    fn resolve(&self, env: &dyn Environment) -> ResolvedDirectories {
        let home = self.home(env);
        let resolver = EnvResolver::new(env, &home);
        let kf = self.known_folders(env, &home);
        let base = base_dirs_from(resolver, &kf);
        let user = user_dirs_from(resolver, kf);

        ResolvedDirectories {
            platform: Platform::Windows,
            home,
            base,
            user,
        }
    }
}

fn base_dirs_from(resolver: EnvResolver<'_>, kf: &KnownFolders) -> BaseDirectories {
    let home = resolver.home();
    let roaming = kf.roaming_app_data.to_string_lossy();
    let program_data = kf.program_data.to_string_lossy();

    BaseDirectories {
        data_home: resolver.dir(env::DATA_HOME, &kf.local_app_data),
        data_dirs: resolver.dir_list(env::DATA_DIRS, [&*roaming, &*program_data]),
        config_home: resolver.dir(env::CONFIG_HOME, &kf.local_app_data),
        config_dirs: resolver.dir_list(env::CONFIG_DIRS, [&*program_data, &*roaming]),
        state_home: resolver.dir(env::STATE_HOME, &kf.local_app_data),
        cache_home: resolver.dir(env::CACHE_HOME, kf.local_app_data.join("cache")),
        runtime_dir: resolver.dir(env::RUNTIME_DIR, &kf.local_app_data),
        application_dirs: unique_path_bufs([kf.programs.clone(), kf.common_programs.clone()], home),
        font_dirs: unique_path_bufs(
            [
                kf.fonts.clone(),
                kf.local_app_data.join("Microsoft").join("Windows").join("Fonts"),
            ],
            home,
        ),
    }
}

fn user_dirs_from(resolver: EnvResolver<'_>, kf: KnownFolders) -> UserDirectories {
    UserDirectories {
        desktop: resolver.dir(env::DESKTOP_DIR, kf.desktop),
        download: resolver.dir(env::DOWNLOAD_DIR, kf.downloads),
        documents: resolver.dir(env::DOCUMENTS_DIR, kf.documents),
        music: resolver.dir(env::MUSIC_DIR, kf.music),
        pictures: resolver.dir(env::PICTURES_DIR, kf.pictures),
        videos: resolver.dir(env::VIDEOS_DIR, kf.videos),
        templates: resolver.dir(env::TEMPLATES_DIR, kf.templates),
        public_share: resolver.dir(env::PUBLICSHARE_DIR, kf.public),
    }
}
