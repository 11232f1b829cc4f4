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

//! Curated, read-only playlists shipped with the application.

use log::warn;

use crate::model::{Playlist, Track};

type Entry = (&'static str, &'static str);

const BEETHOVEN_PIANO: &[Entry] = &[
    ("https://www.youtube.com/watch?v=xVphVzGIcpY", "Beethoven - New Piano Concerto 30"),
    ("https://www.youtube.com/watch?v=pJTY7keAUdA", "Beethoven - New Piano Concerto 32"),
    ("https://www.youtube.com/watch?v=zj_-_Oh113Q", "Beethoven - New Piano Concerto 37"),
    ("https://www.youtube.com/watch?v=sM8X93lJUOg", "Beethoven - New Piano Concerto 40"),
    ("https://www.youtube.com/watch?v=36jdYoQkjek", "Beethoven - New Piano Concerto 41"),
    ("https://www.youtube.com/watch?v=x1j0ylFzIMU", "Beethoven - New Piano Concerto 42"),
    ("https://www.youtube.com/watch?v=-n4TGb1HrBc", "Beethoven - New Piano Concerto 43"),
    ("https://www.youtube.com/watch?v=TRUr9uotKA0", "Beethoven - New Piano Concerto 25"),
    ("https://www.youtube.com/watch?v=-UCvjD2bCks", "Beethoven - New Piano Concerto 23"),
];

const BEETHOVEN_VIOLIN: &[Entry] = &[
    ("https://www.youtube.com/watch?v=p5iCHb3Axbc", "Beethoven - New Violin Concerto 17"),
    ("https://www.youtube.com/watch?v=4VNfql1DfqM", "Beethoven - New Violin Concerto 20"),
    ("https://www.youtube.com/watch?v=5BWNvmBcENE", "Beethoven - New Violin Concerto 21"),
    ("https://www.youtube.com/watch?v=v9YiqJ3Qyz0", "Beethoven - New Violin Concerto 22"),
    ("https://www.youtube.com/watch?v=XF0aobxJ2nw", "Beethoven - New Violin Concerto 23"),
    ("https://www.youtube.com/watch?v=OD1Q6R8tNzY", "Beethoven - New Violin Concerto 26"),
    ("https://www.youtube.com/watch?v=l0nHnYIbCRc", "Beethoven - New Violin Concerto 30"),
];

const MOZART_PIANO: &[Entry] = &[
    ("https://www.youtube.com/watch?v=QQe00ki35Nc", "Mozart - New Piano Concerto 13"),
    ("https://www.youtube.com/watch?v=xf31QPpscBk", "Mozart - New Piano Concerto 14"),
    ("https://www.youtube.com/watch?v=ixPpNBes5Nk", "Mozart - New Piano Concerto 15"),
    ("https://www.youtube.com/watch?v=7K4cNureKEE", "Mozart - New Piano Concerto 25"),
    ("https://www.youtube.com/watch?v=1Iycz4mXlCM", "Mozart - New Piano Concerto 26"),
    ("https://www.youtube.com/watch?v=FKFlOXxb4xE", "Mozart - New Piano Concerto 27"),
    ("https://www.youtube.com/watch?v=sfL8ezD8gBg", "Mozart - New Piano Concerto 28"),
];

const MOZART_VIOLIN: &[Entry] = &[
    ("https://www.youtube.com/watch?v=kYRBWBuTsxY", "Mozart - New Violin Concerto 03"),
    ("https://www.youtube.com/watch?v=LU6m62Pxc7w", "Mozart - New Violin Concerto 06"),
    ("https://www.youtube.com/watch?v=W-r_bQxdvd4", "Mozart - New Violin Concerto 07"),
    ("https://www.youtube.com/watch?v=D3UeW2j6Klw", "Mozart - New Violin Concerto 08"),
];

const FEATURED: &[(&str, &[Entry])] = &[
    ("Best of Beethoven Piano Concertos", BEETHOVEN_PIANO),
    ("Best of Beethoven Violin Concertos", BEETHOVEN_VIOLIN),
    ("Best of Mozart Piano Concertos", MOZART_PIANO),
    ("Best of Mozart Violin Concertos", MOZART_VIOLIN),
];

/// Builds the featured playlists, in display order.
pub fn featured_playlists() -> Vec<Playlist> {
    FEATURED
        .iter()
        .map(|(name, entries)| {
            let tracks = entries
                .iter()
                .filter_map(|(url, title)| match Track::new(*url, *title) {
                    Ok(track) => Some(track),
                    Err(e) => {
                        warn!("Skipping featured track '{}': {}", title, e);
                        None
                    }
                })
                .collect();

            Playlist::with_tracks(*name, tracks)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_featured_track_is_valid() {
        let playlists = featured_playlists();

        assert_eq!(playlists.len(), 4);
        for (playlist, (name, entries)) in playlists.iter().zip(FEATURED) {
            assert_eq!(playlist.name, *name);
            assert_eq!(playlist.len(), entries.len());
        }
    }
}
