//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증, 빈 값 판별 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{non_blank, validate_required_string};
//!
//! let cpf = validate_required_string("  11122233344 ", "cpf")?;
//! assert_eq!(non_blank("   "), None);
//! ```

pub mod string_utils;
