/// Login gate in front of every content mutation.
pub trait AuthGate {
    /// Returns `true` and marks the gate as logged in when the credentials match.
    fn login(&mut self, username: &str, password: &str) -> bool;
    fn logout(&mut self);
    fn is_logged_in(&self) -> bool;
}
