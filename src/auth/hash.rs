// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Password hashes.
//!
//! Passwords are stored as bcrypt hashes (`$2b$...`), the same format the
//! original credential tooling writes, so existing credential files carry
//! over unchanged.

use log::debug;

use crate::error::AuthError;

#[cfg(not(test))]
const COST: u32 = bcrypt::DEFAULT_COST;

// The minimum cost keeps the test suite fast.
#[cfg(test)]
const COST: u32 = 4;

/// Hashes `password` with a fresh random salt.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, COST)?)
}

/// Checks `password` against a stored hash. Hashes that bcrypt cannot read
/// never match.
pub(crate) fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or_else(|e| {
        debug!("Unreadable password hash: {}", e);
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_right_password_only() {
        let stored = hash_password("secret1").unwrap();

        assert!(stored.starts_with("$2b$"));
        assert!(verify_password("secret1", &stored));
        assert!(!verify_password("secret2", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn salts_differ() {
        assert_ne!(hash_password("secret1").unwrap(), hash_password("secret1").unwrap());
    }

    #[test]
    fn accepts_hashes_from_other_bcrypt_tools() {
        let stored = "$2b$04$abcdefghijklmnopqrstuuCHf7DUmNUvMBdGje9JveOQe49tH5xFK";

        assert!(verify_password("secret1", stored));
        assert!(!verify_password("secret2", stored));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(!verify_password("secret1", "secret1"));
        assert!(!verify_password("secret1", "md5$abc$def"));
        assert!(!verify_password("secret1", ""));
    }
}
