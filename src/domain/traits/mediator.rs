use uuid::Uuid;

/// Mediator trait - relays messages between colleagues that never
/// reference each other directly
pub trait Mediator {
    fn send_message(&self, message: &str, sender: &dyn Colleague);
}

/// A participant reachable through a mediator
pub trait Colleague {
    fn id(&self) -> Uuid;

    fn name(&self) -> &str;

    fn receive(&self, message: &str, sender_name: &str);
}
