//! Passenger and bill records.

use std::fmt;

use serde::Serialize;

use super::{PassengerError, PhoneNumber};

/// Age at which a passenger is classified as a senior.
pub const SENIOR_AGE: u32 = 60;

const MAX_AGE: u32 = 120;

/// Discount categories that apply to a rider.
///
/// Both flags may be set at once, in which case both discounts apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RiderClass {
    /// Rider holds a student concession
    pub student: bool,
    /// Rider is a senior citizen
    pub senior: bool,
}

impl RiderClass {
    /// A rider with no discounts.
    pub const FULL_FARE: RiderClass = RiderClass {
        student: false,
        senior: false,
    };

    /// Create a rider class from its flags.
    pub fn new(student: bool, senior: bool) -> Self {
        Self { student, senior }
    }
}

/// A registered passenger.
///
/// Constructed through [`PassengerBuilder`]. Rider classification is fixed
/// at construction: the senior flag is derived from age and the student
/// flag is set on the builder, so neither can change once a bill exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    name: String,
    age: u32,
    phone: PhoneNumber,
    rider: RiderClass,
    bill_amount: f64,
}

impl Passenger {
    /// Start building a passenger from the mandatory details.
    pub fn builder(name: impl Into<String>, age: u32, phone: impl Into<String>) -> PassengerBuilder {
        PassengerBuilder {
            name: name.into(),
            age,
            phone: phone.into(),
            student: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn phone(&self) -> PhoneNumber {
        self.phone
    }

    pub fn is_student(&self) -> bool {
        self.rider.student
    }

    pub fn is_senior(&self) -> bool {
        self.rider.senior
    }

    /// Discount categories for fare calculation.
    pub fn rider_class(&self) -> RiderClass {
        self.rider
    }

    /// The most recently billed fare, or 0 if never billed.
    pub fn bill_amount(&self) -> f64 {
        self.bill_amount
    }

    /// Replace the current bill and return the resulting record.
    pub(crate) fn record_bill(&mut self, amount: f64) -> Bill {
        self.bill_amount = amount;
        Bill {
            passenger: self.name.clone(),
            phone: self.phone,
            amount,
        }
    }
}

/// Builder for [`Passenger`].
///
/// ```
/// use metro_planner::domain::Passenger;
///
/// let passenger = Passenger::builder("Asha", 19, "9876543210")
///     .student(true)
///     .build()
///     .unwrap();
/// assert!(passenger.is_student());
/// assert!(!passenger.is_senior());
/// ```
#[derive(Debug, Clone)]
pub struct PassengerBuilder {
    name: String,
    age: u32,
    phone: String,
    student: bool,
}

impl PassengerBuilder {
    /// Mark the passenger as holding a student concession.
    pub fn student(mut self, student: bool) -> Self {
        self.student = student;
        self
    }

    /// Validate the details and build the passenger.
    pub fn build(self) -> Result<Passenger, PassengerError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PassengerError::EmptyName);
        }
        if self.age == 0 || self.age > MAX_AGE {
            return Err(PassengerError::InvalidAge(self.age));
        }
        let phone = PhoneNumber::parse(&self.phone)?;

        Ok(Passenger {
            name: name.to_string(),
            age: self.age,
            phone,
            rider: RiderClass::new(self.student, self.age >= SENIOR_AGE),
            bill_amount: 0.0,
        })
    }
}

/// A fare billed to a passenger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    /// Passenger name
    pub passenger: String,

    /// Passenger phone number
    #[serde(serialize_with = "serialize_phone")]
    pub phone: PhoneNumber,

    /// Billed amount
    pub amount: f64,
}

fn serialize_phone<S: serde::Serializer>(phone: &PhoneNumber, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(phone.as_str())
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Passenger: {}", self.passenger)?;
        writeln!(f, "Phone Number: {}", self.phone)?;
        write!(f, "Bill Amount: {}", self.amount)
    }
}
