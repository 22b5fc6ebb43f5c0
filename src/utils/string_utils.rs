//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 쓰기 모델에서 "빈 문자열 = 값 없음" 규칙을 일관되게 적용하는 데 사용됩니다.

use serde::{Deserialize, Deserializer};

use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| {
        AppError::ValidationError(format!("{}은(는) 필수입니다", field_name))
    })
}

/// 공백을 제거한 값이 비어 있지 않으면 `Some`을 반환합니다.
///
/// 수정 요청에서 빈 문자열은 "변경 없음"을 뜻합니다.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 선택적 문자열 정리
///
/// `None`, 빈 문자열, 공백만 있는 문자열은 모두 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank)
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `null`, 빈 문자열, 공백만 있는 문자열은 `None`으로, 나머지는 앞뒤 공백을
/// 제거한 `Some`으로 역직렬화합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
///
/// // {"name": "  Ana "} → Some("Ana")
/// // {"name": null}     → None
/// // {"name": "   "}    → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// `null`을 타입의 기본값으로 역직렬화합니다.
///
/// 목록은 빈 `Vec`, 정수 ID는 `0`이 되어 "값 없음"으로 처리됩니다.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
