#[derive(PartialEq, Debug)]
pub enum LoginError {
    /// the submitted code doesn't match the configured passcode
    BadPasscode,
}
