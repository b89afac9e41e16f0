//! Input checks applied by services before anything is written.

use crate::{
    catalog::ALL_CATEGORIES,
    error::{AppError, AppResult},
};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Upper bound for a cake price in cents.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

/// `something@something.something` with no whitespace in any part.
pub fn validate_email(email: &str) -> AppResult<()> {
    let invalid = || AppError::BadRequest("Invalid email address".into());
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Vietnamese mobile numbers: `0` or `84`, a carrier digit (3, 5, 7, 8, 9),
/// then 8 digits. The carrier digit is required after `84` too, so
/// `84` followed by only 8 digits is rejected. An empty string is accepted
/// since phone is optional.
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.is_empty() {
        return Ok(());
    }
    let rest = phone
        .strip_prefix("84")
        .or_else(|| phone.strip_prefix('0'))
        .ok_or_else(|| AppError::BadRequest("Invalid phone number".into()))?;
    let mut chars = rest.chars();
    let carrier_ok = matches!(chars.next(), Some('3' | '5' | '7' | '8' | '9'));
    let subscriber: Vec<char> = chars.collect();
    if carrier_ok && subscriber.len() == 8 && subscriber.iter().all(char::is_ascii_digit) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid phone number".into()))
    }
}

pub fn validate_required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_price(price: i64) -> AppResult<()> {
    if price < 0 {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }
    if price > MAX_PRICE {
        return Err(AppError::BadRequest(format!(
            "price must not exceed {MAX_PRICE}"
        )));
    }
    Ok(())
}

/// `All` is the catalog filter for every category and cannot name one.
pub fn validate_category_label(label: &str) -> AppResult<()> {
    validate_required("category", label)?;
    if label.trim() == ALL_CATEGORIES {
        return Err(AppError::BadRequest(format!(
            "\"{ALL_CATEGORIES}\" is reserved and cannot be used as a category"
        )));
    }
    Ok(())
}

pub fn validate_stock(stock: i32) -> AppResult<()> {
    if stock < 0 {
        return Err(AppError::BadRequest("stock must not be negative".into()));
    }
    Ok(())
}

pub fn validate_discount(discount: Option<i32>) -> AppResult<()> {
    match discount {
        Some(d) if !(0..=100).contains(&d) => Err(AppError::BadRequest(
            "discount_percent must be between 0 and 100".into(),
        )),
        _ => Ok(()),
    }
}

pub fn validate_rating(rating: Option<f64>) -> AppResult<()> {
    match rating {
        Some(r) if !r.is_finite() || r < 0.0 => {
            Err(AppError::BadRequest("rating must be 0 or greater".into()))
        }
        _ => Ok(()),
    }
}
