#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod import;
pub mod log;
pub mod memory;
pub mod record;
pub mod settings;

#[cfg(test)]
mod tests {
    pub mod data;
}
