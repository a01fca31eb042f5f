//! Windows known-folder lookups.

use std::path::PathBuf;

/// Semantically named folders the Windows shell can locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    Profile,
    Windows,
    ProgramData,
    RoamingAppData,
    LocalAppData,
    Desktop,
    Downloads,
    Documents,
    Music,
    Pictures,
    Videos,
    Templates,
    Public,
    Fonts,
    Programs,
    CommonPrograms,
}

/// Source of known-folder locations.
#[cfg_attr(test, mockall::automock)]
pub trait KnownFolderProbe: Send + Sync {
    /// Location of `folder`, or `None` if the platform cannot tell.
    fn lookup(&self, folder: KnownFolder) -> Option<PathBuf>;
}

/// Probe that never knows anything; every folder falls through to the
/// environment and computed defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKnownFolders;

impl KnownFolderProbe for NoKnownFolders {
    fn lookup(&self, _folder: KnownFolder) -> Option<PathBuf> {
        None
    }
}

/// The shell's `SHGetKnownFolderPath`. Always `None` off Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeKnownFolders;

impl KnownFolderProbe for NativeKnownFolders {
    fn lookup(&self, folder: KnownFolder) -> Option<PathBuf> {
        #[cfg(windows)]
        {
            shell::known_folder_path(folder)
        }

        #[cfg(not(windows))]
        {
            let _ = folder;
            None
        }
    }
}

#[cfg(windows)]
mod shell {
    use std::path::PathBuf;

    use windows::Win32::Foundation::HANDLE;
    use windows::Win32::System::Com::CoTaskMemFree;
    use windows::Win32::UI::Shell::{
        FOLDERID_CommonPrograms, FOLDERID_Desktop, FOLDERID_Documents, FOLDERID_Downloads,
        FOLDERID_Fonts, FOLDERID_LocalAppData, FOLDERID_Music, FOLDERID_Pictures,
        FOLDERID_Profile, FOLDERID_ProgramData, FOLDERID_Programs, FOLDERID_Public,
        FOLDERID_RoamingAppData, FOLDERID_Templates, FOLDERID_Videos, FOLDERID_Windows,
        KF_FLAG_DEFAULT, KF_FLAG_DEFAULT_PATH, KF_FLAG_DONT_VERIFY, KNOWN_FOLDER_FLAG,
        SHGetKnownFolderPath,
    };
    use windows::core::GUID;

    use super::KnownFolder;

    const fn folder_id(folder: KnownFolder) -> &'static GUID {
        match folder {
            KnownFolder::Profile => &FOLDERID_Profile,
            KnownFolder::Windows => &FOLDERID_Windows,
            KnownFolder::ProgramData => &FOLDERID_ProgramData,
            KnownFolder::RoamingAppData => &FOLDERID_RoamingAppData,
            KnownFolder::LocalAppData => &FOLDERID_LocalAppData,
            KnownFolder::Desktop => &FOLDERID_Desktop,
            KnownFolder::Downloads => &FOLDERID_Downloads,
            KnownFolder::Documents => &FOLDERID_Documents,
            KnownFolder::Music => &FOLDERID_Music,
            KnownFolder::Pictures => &FOLDERID_Pictures,
            KnownFolder::Videos => &FOLDERID_Videos,
            KnownFolder::Templates => &FOLDERID_Templates,
            KnownFolder::Public => &FOLDERID_Public,
            KnownFolder::Fonts => &FOLDERID_Fonts,
            KnownFolder::Programs => &FOLDERID_Programs,
            KnownFolder::CommonPrograms => &FOLDERID_CommonPrograms,
        }
    }

    /// Try the current location first, then the default one. Neither
    /// lookup requires the folder to exist.
    #[allow(unsafe_code)]
    pub(super) fn known_folder_path(folder: KnownFolder) -> Option<PathBuf> {
        let id = folder_id(folder);

        for flag in [KF_FLAG_DEFAULT, KF_FLAG_DEFAULT_PATH] {
            let flags = KNOWN_FOLDER_FLAG(flag.0 | KF_FLAG_DONT_VERIFY.0);

            // SAFETY: `id` points to a static GUID and a null token selects
            // the current user.
            let Ok(raw) = (unsafe { SHGetKnownFolderPath(id, flags, HANDLE::default()) }) else {
                continue;
            };

            // SAFETY: on success the shell returns a valid NUL-terminated
            // string that the caller must release with `CoTaskMemFree`.
            let decoded = unsafe { raw.to_string() };
            unsafe { CoTaskMemFree(Some(raw.0.cast_const().cast())) };

            if let Ok(path) = decoded {
                let path = path.trim();
                if !path.is_empty() {
                    return Some(PathBuf::from(path));
                }
            }
        }

        None
    }
}
