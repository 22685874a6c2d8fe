#![no_main]

use libfuzzer_sys::fuzz_target;

use cosmo::{Server, ServerSet, Task};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = text.split('\n');
    let task = parts.next().unwrap_or_default();
    let filter = parts.next().filter(|s| !s.is_empty());

    let servers: ServerSet = parts
        .map(|name| Server::new(name).with_task(Task::new(task, name).with_local(["true"])))
        .collect();

    // Lookup over arbitrary names should never panic
    let _ = servers.find_task(task, filter);
});
