use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_flurry_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("FLURRY_CONFIG_PATH", "/tmp/flurry-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/flurry-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("flurry")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("flurry")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
shuffle = true
autoplay = false

[audio]
volume = 0.35
quit_fade_out_ms = 123

[ui]
follow_playback = false
header_text = "hello"
track_prefix = "* "

[catalog]
base_dir = "/srv/media"
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
max_depth = 2
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FLURRY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("FLURRY__AUDIO__VOLUME");

    let s = Settings::load().unwrap();
    assert!(s.playback.shuffle);
    assert!(!s.playback.autoplay);
    assert_eq!(s.audio.volume, 0.35);
    assert_eq!(s.audio.quit_fade_out_ms, 123);
    assert!(!s.ui.follow_playback);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.track_prefix, "* ");
    assert_eq!(
        s.catalog.base_dir.as_deref(),
        Some(std::path::Path::new("/srv/media"))
    );
    assert_eq!(s.catalog.extensions, vec!["mp3".to_string()]);
    assert!(!s.catalog.recursive);
    assert!(!s.catalog.include_hidden);
    assert!(!s.catalog.follow_links);
    assert_eq!(s.catalog.max_depth, Some(2));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
quit_fade_out_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("FLURRY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("FLURRY__AUDIO__QUIT_FADE_OUT_MS", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.quit_fade_out_ms, 0);
}

#[test]
fn validate_rejects_out_of_range_volume() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.audio.volume = 1.5;
    assert!(s.validate().is_err());

    s.audio.volume = 0.5;
    s.catalog.extensions.clear();
    assert!(s.validate().is_err());
}
