mod notifier;

pub use notifier::EventNotifier;
