/*
config.rs

Copyright 2026 Gamebox contributors

This file is part of Gamebox.

Gamebox is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gamebox is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gamebox. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Application constants and file locations.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Application name, also used for the data directory.
pub const APP: &str = "gamebox";

/// Notice printed by the `--version` option.
pub const COPYRIGHT_NOTICE: &str = concat!(
    "gamebox ",
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2026 Gamebox contributors
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Return the directory where Gamebox saves its data, creating it if needed.
pub fn data_dir() -> Result<PathBuf, Box<dyn Error>> {
    let mut dir: PathBuf = dirs::data_dir().ok_or("cannot locate the user data directory")?;
    dir.push(APP);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
