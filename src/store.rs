use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::input::{InputRecord, VehicleRole};

/// 마지막으로 사용한 입력값 저장 시 발생 가능한 오류.
#[derive(Debug)]
pub enum StoreError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화/역직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "입력 파일 입출력 오류: {e}"),
            StoreError::Json(e) => write!(f, "입력 파일 형식 오류: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Json(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct StoredInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<InputRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    planned: Option<InputRecord>,
}

/// 차량 역할별 최근 입력값을 JSON 파일로 보관한다.
#[derive(Debug, Clone)]
pub struct InputStore {
    path: PathBuf,
    inputs: StoredInputs,
}

impl InputStore {
    /// 파일을 읽어 저장소를 연다. 파일이 없으면 빈 저장소를 반환한다.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let inputs = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            debug!(path = %path.display(), "input store not found, starting empty");
            StoredInputs::default()
        };
        Ok(Self { path, inputs })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, role: VehicleRole) -> Option<&InputRecord> {
        match role {
            VehicleRole::Current => self.inputs.current.as_ref(),
            VehicleRole::Planned => self.inputs.planned.as_ref(),
        }
    }

    pub fn set(&mut self, role: VehicleRole, record: InputRecord) {
        match role {
            VehicleRole::Current => self.inputs.current = Some(record),
            VehicleRole::Planned => self.inputs.planned = Some(record),
        }
    }

    /// 현재 내용을 JSON으로 기록한다. 상위 디렉터리가 없으면 만든다.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.inputs)?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "saved last-used inputs");
        Ok(())
    }
}
