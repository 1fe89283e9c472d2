//! Linux default mounts that BSD runtimes cannot honor.
//!
//! These are the mounts a Linux bundle generator adds to every spec. A
//! mount is only considered incompatible when it is an exact copy of one
//! of them; anything the user customized stays.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use bsdbundle_common::types::Mount;

use crate::compare::mounts_equal;

/// `(destination, type, source, options)` of every denied mount.
const LINUX_DEFAULT_MOUNTS: &[(&str, &str, &str, &[&str])] = &[
    ("/proc", "proc", "proc", &["nosuid", "noexec", "nodev"]),
    (
        "/dev",
        "tmpfs",
        "tmpfs",
        &["nosuid", "strictatime", "mode=755", "size=65536k"],
    ),
    (
        "/dev/pts",
        "devpts",
        "devpts",
        &[
            "nosuid",
            "noexec",
            "newinstance",
            "ptmxmode=0666",
            "mode=0620",
            "gid=5",
        ],
    ),
    (
        "/dev/shm",
        "tmpfs",
        "shm",
        &["nosuid", "noexec", "nodev", "mode=1777", "size=65536k"],
    ),
    ("/dev/mqueue", "mqueue", "mqueue", &["nosuid", "noexec", "nodev"]),
    ("/sys", "sysfs", "sysfs", &["nosuid", "noexec", "nodev", "ro"]),
    (
        "/run",
        "tmpfs",
        "tmpfs",
        &["nosuid", "strictatime", "mode=755", "size=65536k"],
    ),
];

static DENYLIST: OnceLock<BTreeMap<&'static str, Mount>> = OnceLock::new();

fn table() -> &'static BTreeMap<&'static str, Mount> {
    DENYLIST.get_or_init(|| {
        LINUX_DEFAULT_MOUNTS
            .iter()
            .map(|&(destination, typ, source, options)| {
                (
                    destination,
                    Mount::new(destination, typ, source, options.iter().copied()),
                )
            })
            .collect()
    })
}

/// Returns the denied definition for `destination`, if there is one.
pub fn lookup(destination: &str) -> Option<&'static Mount> {
    table().get(destination)
}

/// Iterates over every denied definition, ordered by destination.
pub fn entries() -> impl Iterator<Item = &'static Mount> {
    table().values()
}

/// Number of denied definitions.
pub fn len() -> usize {
    table().len()
}

/// Reports whether `mount` is an exact copy of a Linux default.
pub fn is_incompatible(mount: &Mount) -> bool {
    lookup(&mount.destination).is_some_and(|denied| mounts_equal(mount, denied))
}
