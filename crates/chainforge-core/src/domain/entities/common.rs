/// Permissions applied to a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    /// Regular, non-executable file.
    pub const fn read_write() -> Self {
        Self { executable: false }
    }

    /// Scripts such as `gradlew`.
    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}
