//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 저장소, 비밀번호 해시 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, ServerConfig, StorageConfig};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let backend = StorageConfig::backend();
//! let uri = DatabaseConfig::uri();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongo"       # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="apibancaria_dev"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"      # development, test, staging, production
//!
//! # 보안 설정
//! export BCRYPT_COST="12"              # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
