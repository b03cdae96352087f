use crate::catalog::EmployeeClass;
use crate::plan::CurrentCost;

/// 인력 유형별 인원과 월 인건비 총액.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassCost {
    pub headcount: f64,
    /// 월 인건비 총액 [만원]
    pub total_cost: f64,
}

impl ClassCost {
    /// 1인당 월 인건비. 인원이 0 이하면 0.
    pub fn unit_cost(&self) -> f64 {
        if self.headcount > 0.0 {
            self.total_cost / self.headcount
        } else {
            0.0
        }
    }
}

/// 확정 입력에서 한 번 만들어지는 인건비 기준. 세션 동안 읽기 전용.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaborBaseline {
    pub full_time: ClassCost,
    pub part_time: ClassCost,
    ft_unit_cost: f64,
    pt_unit_cost: f64,
}

impl LaborBaseline {
    pub fn new(full_time: ClassCost, part_time: ClassCost) -> Self {
        Self {
            full_time,
            part_time,
            ft_unit_cost: full_time.unit_cost(),
            pt_unit_cost: part_time.unit_cost(),
        }
    }

    pub fn from_current_cost(cost: &CurrentCost) -> Self {
        Self::new(
            ClassCost {
                headcount: cost.employee_count_ft,
                total_cost: cost.employee_cost_ft,
            },
            ClassCost {
                headcount: cost.employee_count_pt,
                total_cost: cost.employee_cost_pt,
            },
        )
    }

    /// 인력 유형별 1인당 월 인건비 [만원].
    pub fn unit_cost(&self, class: EmployeeClass) -> f64 {
        match class {
            EmployeeClass::FullTime => self.ft_unit_cost,
            EmployeeClass::PartTime => self.pt_unit_cost,
        }
    }
}

