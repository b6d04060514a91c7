use crate::domain::models::{Material, MaterialStatus};

/// Counts backing the material summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialStats {
    pub total: usize,
    /// InStock plus Consumed: everything that made it to site.
    pub fully_stocked: usize,
    pub on_order: usize,
    pub out_of_stock: usize,
}

pub fn material_stats(materials: &[Material]) -> MaterialStats {
    let mut stats = MaterialStats {
        total: materials.len(),
        ..Default::default()
    };
    for material in materials {
        match material.status {
            MaterialStatus::InStock | MaterialStatus::Consumed => stats.fully_stocked += 1,
            MaterialStatus::OnOrder => stats.on_order += 1,
            MaterialStatus::OutOfStock => stats.out_of_stock += 1,
        }
    }
    stats
}

/// Delivered share of the planned quantity, as a capped percentage.
///
/// A plan of zero yields 0 rather than a division by zero; over-delivery is
/// capped at 100.
pub fn supply_ratio(material: &Material) -> u8 {
    if material.planned_quantity == 0 {
        return 0;
    }
    let ratio =
        100.0 * f64::from(material.actual_quantity) / f64::from(material.planned_quantity);
    (ratio.round() as u32).min(100) as u8
}

/// Exact-status filter; `None` returns the input unfiltered. Order-preserving.
pub fn filter_materials<'a>(
    materials: &'a [Material],
    status: Option<MaterialStatus>,
) -> Vec<&'a Material> {
    materials
        .iter()
        .filter(|m| status.map_or(true, |s| m.status == s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: &str, planned: u32, actual: u32, status: MaterialStatus) -> Material {
        Material {
            id: id.to_string(),
            project_id: "p1".to_string(),
            name: "Ống thép PCCC DN100".to_string(),
            unit: "Mét".to_string(),
            planned_quantity: planned,
            actual_quantity: actual,
            status,
        }
    }

    #[test]
    fn stats_group_in_stock_and_consumed_together() {
        let materials = vec![
            material("mt1", 500, 320, MaterialStatus::OnOrder),
            material("mt2", 1200, 1200, MaterialStatus::InStock),
            material("mt3", 150, 50, MaterialStatus::OutOfStock),
            material("mt4", 2, 2, MaterialStatus::Consumed),
        ];

        let stats = material_stats(&materials);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.fully_stocked, 2);
        assert_eq!(stats.on_order, 1);
        assert_eq!(stats.out_of_stock, 1);
    }

    #[test]
    fn supply_ratio_stays_in_bounds() {
        assert_eq!(
            supply_ratio(&material("m", 500, 320, MaterialStatus::OnOrder)),
            64
        );
        // Over-delivery caps at 100.
        assert_eq!(
            supply_ratio(&material("m", 100, 250, MaterialStatus::InStock)),
            100
        );
        // Zero plan never divides by zero.
        assert_eq!(
            supply_ratio(&material("m", 0, 10, MaterialStatus::InStock)),
            0
        );
        assert_eq!(supply_ratio(&material("m", 3, 1, MaterialStatus::OnOrder)), 33);
    }

    #[test]
    fn filter_by_out_of_stock_returns_exactly_that_record() {
        let materials = vec![
            material("mt1", 500, 320, MaterialStatus::OnOrder),
            material("mt2", 150, 50, MaterialStatus::OutOfStock),
            material("mt3", 1200, 1200, MaterialStatus::InStock),
        ];

        let filtered = filter_materials(&materials, Some(MaterialStatus::OutOfStock));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "mt2");
    }

    #[test]
    fn filter_all_preserves_input_order() {
        let materials = vec![
            material("mt2", 150, 50, MaterialStatus::OutOfStock),
            material("mt1", 500, 320, MaterialStatus::OnOrder),
        ];

        let all = filter_materials(&materials, None);
        let ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["mt2", "mt1"]);
    }
}
