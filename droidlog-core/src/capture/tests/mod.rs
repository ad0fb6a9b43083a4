#[cfg(unix)]
mod session_tests;

#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Lines every fake device prints.
#[cfg(unix)]
pub(super) const DEVICE_LOG: &str = "\
12-31 14:19:40.332 E/WifiService( 10): wifi scan failed
12-31 14:19:40.333 W/WifiService( 10): slow scan
12-31 14:19:40.334 I/WifiService( 10): scan done
12-31 14:19:40.335 E/Other( 11): unrelated
12-31 14:19:40.336 V/wifiservice( 10): verbose detail
";

/// How the fake `adb` behaves after printing [`DEVICE_LOG`].
#[cfg(unix)]
#[derive(Clone, Copy)]
pub(super) enum Tail {
    Exit,
    Hang,
}

/// Writes an executable shell script into `dir` that mimics `adb logcat`.
/// Every invocation appends its arguments to `args.log` in the same directory.
#[cfg(unix)]
pub(super) fn fake_adb(dir: &Path, clear_status: i32, tail: Tail) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("adb");
    let log = dir.join("args.log");
    let tail = match tail {
        Tail::Exit => "exit 0",
        Tail::Hang => "exec sleep 5",
    };
    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> '{log}'\n\
         if [ \"$1\" = \"-s\" ]; then shift 2; fi\n\
         if [ \"$2\" = \"-c\" ]; then exit {clear_status}; fi\n\
         cat <<'LOG'\n\
         {DEVICE_LOG}\
         LOG\n\
         {tail}\n",
        log = log.display(),
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
