//! Identifier generation
//!
//! Every drone and medication id is a random UUIDv4 assigned by the service.
//! Ids whose canonical string starts with `0` are rejected and redrawn: some
//! id libraries on the consuming side mangle a leading zero nibble when
//! round-tripping through hex strings.

use uuid::Uuid;

/// Draw a random id whose canonical form does not start with `0`
pub fn generate() -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if id.as_bytes()[0] >> 4 != 0 {
            return id;
        }
    }
}
