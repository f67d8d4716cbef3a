use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*$")
        .expect("Invalid email regex")
});

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

/// 邮箱格式校验；允许 `user@localhost` 形式的本地地址
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    let domain = email.rsplit('@').next().unwrap_or_default();
    if domain != "localhost" && !domain.contains('.') {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略检查结果
#[derive(Debug, Clone, Default)]
pub struct PasswordCheck {
    pub problems: Vec<&'static str>,
}

impl PasswordCheck {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn message(&self) -> String {
        self.problems.join("; ")
    }
}

const COMMON_PASSWORDS: [&str; 8] = [
    "password",
    "password1",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "abcd1234",
    "welcome1",
];

/// 密码策略：8..=128 个字符，同时包含大写、小写字母与数字，且不是常见弱密码
pub fn check_password(password: &str) -> PasswordCheck {
    let mut problems = Vec::new();
    let len = password.chars().count();

    if len < PASSWORD_MIN_LEN {
        problems.push("Password must be at least 8 characters long");
    }
    if len > PASSWORD_MAX_LEN {
        problems.push("Password must be at most 128 characters long");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        problems.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        problems.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("Password must contain at least one digit");
    }
    if COMMON_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        problems.push("Password is too common, please choose a stronger password");
    }

    PasswordCheck { problems }
}

pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let check = check_password(password);
    if check.is_valid() {
        Ok(())
    } else {
        Err(check.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emails() {
        assert!(validate_email("student@edu.uz").is_ok());
        assert!(validate_email("first.last+tag@mail.example.com").is_ok());
        assert!(validate_email("admin@localhost").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@@example.com").is_err());
    }

    #[test]
    fn test_strong_password() {
        assert!(check_password("SecurePass123").is_valid());
        assert!(validate_password_simple("Kitob2024Yangi").is_ok());
    }

    #[test]
    fn test_password_problems_are_collected() {
        let check = check_password("abc");
        assert!(!check.is_valid());
        assert!(
            check
                .problems
                .contains(&"Password must be at least 8 characters long")
        );
        assert!(
            check
                .problems
                .contains(&"Password must contain at least one uppercase letter")
        );
        assert!(
            check
                .problems
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password_rejected() {
        let check = check_password("Password1");
        assert!(
            check
                .problems
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_overlong_password_rejected() {
        let long = format!("Aa1{}", "x".repeat(200));
        assert!(validate_password_simple(&long).is_err());
    }
}
