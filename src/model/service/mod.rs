/// represents the result of checking a session token presented by a client
#[derive(PartialEq, Debug)]
pub enum CheckSessionResult {
    /// the token was issued by this server and has not expired
    Valid,
    /// the token was issued by this server, but its lifetime is over
    Expired,
    /// the token is malformed or its signature doesn't match
    Invalid,
}
