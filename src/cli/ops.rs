use crate::identity::Identity;
use crate::registry::{LogicV1, Registry};
use std::sync::Arc;

pub fn handle_init(registry: &Registry, caller: Identity) {
    match registry.initialize(caller, Arc::new(LogicV1)) {
        Ok(()) => println!("Registry initialized. Admin: {}", caller),
        Err(e) => println!("Error: {}", e),
    }
}

pub fn handle_create(registry: &Registry, caller: Identity, name: &str) {
    match registry.create_account(caller, name) {
        Ok(()) => println!("Account created: '{}'", name),
        Err(e) => println!("Error: {}", e),
    }
}

pub fn handle_show(registry: &Registry, caller: Identity) {
    match registry.has_account(caller) {
        Ok(true) => match registry.get_name(caller) {
            Ok(name) => {
                println!("Identity: {}", caller);
                println!("Name:     {}", name);
            }
            Err(e) => println!("Error: {}", e),
        },
        Ok(false) => println!("No account for identity {}", caller),
        Err(e) => println!("Error: {}", e),
    }
}

pub fn handle_rename(registry: &Registry, caller: Identity, new_name: &str) {
    match registry.update_name(caller, new_name) {
        Ok(()) => println!("Account renamed to '{}'", new_name),
        Err(e) => println!("Error: {}", e),
    }
}

pub fn handle_delete(registry: &Registry, caller: Identity) {
    match registry.delete_account(caller) {
        Ok(()) => println!("Account deleted."),
        Err(e) => println!("Error: {}", e),
    }
}
