//! # Airfoil Profiles
//!
//! Loads the 2D cross-section that every loft starts from.
//!
//! ## File Format
//!
//! ```text
//! <N>              vertex count, exactly once, before any coordinate
//! <x1>\t<y1>
//! ...
//! <xN>\t<yN>
//! ```
//!
//! Every stored point is relative to the first coordinate line, so the
//! first point of a loaded profile is always `(0, 0)`. The count is a hard
//! cap: coordinate lines past `N` are dropped.

use crate::error::{MeshError, Result};
use glam::DVec2;
use std::path::Path;


/// One cross-section sample, relative to the profile origin.
pub type ProfilePoint = DVec2;

/// An ordered 2D cross-section, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    points: Vec<ProfilePoint>,
    declared_count: Option<usize>,
}

impl Profile {
    /// Creates a profile from points supplied in code.
    ///
    /// Points are taken as given; no origin normalization is applied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foil_mesh::Profile;
    /// use glam::DVec2;
    ///
    /// let profile = Profile::new(vec![DVec2::ZERO, DVec2::X, DVec2::new(0.5, 1.0)]);
    /// assert_eq!(profile.len(), 3);
    /// ```
    pub fn new(points: Vec<ProfilePoint>) -> Self {
        Self {
            points,
            declared_count: None,
        }
    }

    /// Reads and parses a profile file.
    ///
    /// # Errors
    ///
    /// [`MeshError::Io`] if the file cannot be read, [`MeshError::Format`]
    /// if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| MeshError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let profile = Self::parse(&source)?;
        tracing::info!(
            path = %path.display(),
            points = profile.len(),
            "Loaded airfoil profile"
        );
        Ok(profile)
    }

    /// Parses profile text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foil_mesh::Profile;
    /// use glam::DVec2;
    ///
    /// let profile = Profile::parse("3\n0.0\t0.0\n1.0\t0.0\n0.5\t1.0\n").unwrap();
    /// assert_eq!(profile.points(), &[DVec2::ZERO, DVec2::X, DVec2::new(0.5, 1.0)]);
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut declared: Option<usize> = None;
        let mut origin: Option<DVec2> = None;
        let mut points = Vec::new();
        let mut dropped = 0usize;

        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            // A trailing tab ends the last field, it does not open a new one
            let fields = line.strip_suffix('\t').unwrap_or(line);
            let tokens: Vec<&str> = fields.split('\t').map(str::trim).collect();
            match tokens.as_slice() {
                [count] => {
                    if declared.is_some() {
                        return Err(MeshError::format(line_no, "vertex count redeclared"));
                    }
                    let count: usize = count
                        .parse()
                        .map_err(|_| MeshError::format(line_no, "non-numeric vertex count"))?;
                    points.reserve_exact(count.min(source.len()));
                    declared = Some(count);
                }
                [x, y] => {
                    let Some(cap) = declared else {
                        return Err(MeshError::format(
                            line_no,
                            "coordinate before vertex count",
                        ));
                    };
                    if points.len() >= cap {
                        dropped += 1;
                        continue;
                    }

                    let raw = DVec2::new(
                        parse_coordinate(x, line_no)?,
                        parse_coordinate(y, line_no)?,
                    );
                    let origin = *origin.get_or_insert(raw);
                    points.push(raw - origin);
                }
                _ => {
                    return Err(MeshError::format(line_no, "unexpected token count"));
                }
            }
        }

        let Some(declared) = declared else {
            return Err(MeshError::format(0, "missing vertex count"));
        };
        if dropped > 0 {
            tracing::warn!(
                declared,
                dropped,
                "Dropped coordinate lines past the declared vertex count"
            );
        }

        Ok(Self {
            points,
            declared_count: Some(declared),
        })
    }

    /// Returns the points in file order.
    #[inline]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the profile has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the count header of a parsed file, `None` for profiles built in code.
    ///
    /// May exceed [`Profile::len`] when the file holds fewer coordinates
    /// than it declares.
    #[inline]
    pub fn declared_count(&self) -> Option<usize> {
        self.declared_count
    }

    /// Returns true if the first and last points coincide within `tolerance`.
    ///
    /// A loft only wraps around the cross-section when the profile itself
    /// repeats its first point at the end.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                first.distance(*last) <= tolerance
            }
            _ => false,
        }
    }
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| MeshError::format(line_no, "non-numeric coordinate"))
}
