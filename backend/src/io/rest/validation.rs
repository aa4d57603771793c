//! # Request Validation
//!
//! Field checks run on region write requests before anything reaches the
//! domain layer. Every check runs, so a single response reports all
//! problems with the request. The one exception is a `null` body, which is
//! reported alone.
//!
//! Latitude and longitude must currently be exactly zero. This mirrors the
//! rule the API has always enforced; real coordinates are rejected.

use std::collections::BTreeMap;
use std::fmt;

use shared::{AddRegionRequest, UpdateRegionRequest, ValidationProblem};

/// The request fields validation can fail on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationField {
    /// The request body as a whole
    Request,
    Code,
    Name,
    Area,
    Lat,
    Long,
    Population,
}

impl ValidationField {
    /// Key used in the JSON error body, matching the request's wire names
    pub fn key(self) -> &'static str {
        match self {
            ValidationField::Request => "request",
            ValidationField::Code => "code",
            ValidationField::Name => "name",
            ValidationField::Area => "area",
            ValidationField::Lat => "lat",
            ValidationField::Long => "long",
            ValidationField::Population => "population",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationField::Request => "Request",
            ValidationField::Code => "Code",
            ValidationField::Name => "Name",
            ValidationField::Area => "Area",
            ValidationField::Lat => "Lat",
            ValidationField::Long => "Long",
            ValidationField::Population => "Population",
        };
        f.write_str(label)
    }
}

/// Field-level validation failures.
///
/// Every present field maps to at least one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<ValidationField, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: ValidationField, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: ValidationField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn messages(&self, field: ValidationField) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = ValidationField> + '_ {
        self.errors.keys().copied()
    }

    /// `Ok(())` when nothing failed, otherwise the errors themselves
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_problem(&self) -> ValidationProblem {
        let errors = self
            .errors
            .iter()
            .map(|(field, messages)| (field.key().to_string(), messages.clone()))
            .collect();
        ValidationProblem::new(errors)
    }
}

/// Validate the body of `POST /Regions`. `None` is a JSON `null` body.
pub fn validate_add_region(request: Option<&AddRegionRequest>) -> ValidationErrors {
    match request {
        None => missing_region(),
        Some(r) => validate_region_fields(
            r.code.as_deref(),
            r.name.as_deref(),
            r.area,
            r.lat,
            r.long,
            r.population,
        ),
    }
}

/// Validate the body of `PUT /Regions/{id}`
pub fn validate_update_region(request: Option<&UpdateRegionRequest>) -> ValidationErrors {
    match request {
        None => missing_region(),
        Some(r) => validate_region_fields(
            r.code.as_deref(),
            r.name.as_deref(),
            r.area,
            r.lat,
            r.long,
            r.population,
        ),
    }
}

/// Run `validate` over an optional body and hand back the body if it passed
pub fn validated<T>(
    request: Option<T>,
    validate: impl Fn(Option<&T>) -> ValidationErrors,
) -> Result<T, ValidationErrors> {
    match request {
        Some(request) => validate(Some(&request)).into_result().map(|()| request),
        None => Err(validate(None)),
    }
}

fn missing_region() -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(ValidationField::Request, "Region data is required");
    errors
}

fn validate_region_fields(
    code: Option<&str>,
    name: Option<&str>,
    area: f64,
    lat: f64,
    long: f64,
    population: i64,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(code) {
        errors.add(
            ValidationField::Code,
            format!("{} cannot be null, empty or whitespace", ValidationField::Code),
        );
    }

    if is_blank(name) {
        errors.add(
            ValidationField::Name,
            format!("{} cannot be null, empty or whitespace", ValidationField::Name),
        );
    }

    if area.is_nan() || area <= 0.0 {
        errors.add(
            ValidationField::Area,
            format!("{} must be greater than zero", ValidationField::Area),
        );
    }

    if lat != 0.0 {
        errors.add(ValidationField::Lat, format!("{} must be zero", ValidationField::Lat));
    }

    if long != 0.0 {
        errors.add(ValidationField::Long, format!("{} must be zero", ValidationField::Long));
    }

    if population < 0 {
        errors.add(
            ValidationField::Population,
            format!("{} cannot be negative", ValidationField::Population),
        );
    }

    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
