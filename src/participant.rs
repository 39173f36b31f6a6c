use regex::Regex;

use crate::model::Participant;

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

pub fn validate_email(email: &str) -> bool {
    matches(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", email)
}

/// Indian mobile number format: ten digits, leading 6-9.
pub fn validate_mobile(mobile: &str) -> bool {
    matches(r"^[6-9]\d{9}$", mobile)
}

/// Roll number format: 235UCS001.
pub fn validate_roll_no(roll_no: &str) -> bool {
    matches(r"^\d{3}[A-Z]{3}\d{3}$", roll_no.trim())
}

impl Participant {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().len() < 2 {
            return Err("Enter your full name".to_string());
        }
        if !validate_roll_no(&self.roll_no) {
            return Err("Roll number must look like 235UCS001".to_string());
        }
        if !validate_mobile(&self.mobile_no) {
            return Err("Mobile number must be 10 digits starting with 6-9".to_string());
        }
        if !validate_email(&self.email) {
            return Err("Enter a valid email address".to_string());
        }
        Ok(())
    }
}
