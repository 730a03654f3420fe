//! 수요 예측 모델
//!
//! LLM 프로바이더가 반환한 예측 결과를 표현하는 값 객체입니다.

use serde::{Deserialize, Serialize};

/// 메뉴 수요 예측 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandEstimate {
    /// 예상 판매 수량
    pub demanda_estimada: i32,
    /// 예측 신뢰도 (0.0 ~ 1.0)
    pub confianza: f64,
}

impl DemandEstimate {
    /// 신뢰도를 유효 범위로 클램프한 결과를 생성
    pub fn new(demanda_estimada: i32, confianza: f64) -> Self {
        Self {
            demanda_estimada: demanda_estimada.max(0),
            confianza: confianza.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_values() {
        let estimate = DemandEstimate::new(-3, 1.7);

        assert_eq!(estimate.demanda_estimada, 0);
        assert_eq!(estimate.confianza, 1.0);
    }
}
