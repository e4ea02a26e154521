//=========================================================================
// Built-in Datasets
//=========================================================================
//
// Default card sets shipped with the game.
//
// Timeline: 9 American + 9 French revolution events.
// Cause chain: 4 chains × 3 roles, one card per grid slot.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{CauseCard, Chain, EventCard, Revolution, Role};

//=== Timeline Events =====================================================

/// The 18 timeline events, in no particular order.
pub fn default_timeline_events() -> Vec<EventCard> {
    use Revolution::{American, French};

    vec![
        //--- American revolution ------------------------------------------
        EventCard::new("e1763-war", "7-årskriget avslutas (1763)", 1763, American),
        EventCard::new("e1765-stamp", "Stämpelskatten införs (1765)", 1765, American),
        EventCard::new("e1773-boston", "Boston Tea Party (1773)", 1773, American),
        EventCard::new("e1775-war", "Kriget mot Storbritannien inleds (1775)", 1775, American),
        EventCard::new("e1776-declaration", "Självständighetsförklaringen (1776)", 1776, American),
        EventCard::new("e1777-saratoga", "Slaget vid Saratoga (1777)", 1777, American),
        EventCard::new("e1783-paris", "Parisfreden – USA erkänns (1783)", 1783, American),
        EventCard::new("e1787-constitution", "USA:s konstitution antas (1787)", 1787, American),
        EventCard::new("e1791-billofrights", "Bill of Rights antas (1791)", 1791, American),

        //--- French revolution --------------------------------------------
        EventCard::new("f1788-crisis", "Finanskris i Frankrike (1788)", 1788, French),
        EventCard::new("f1789-estates", "Generalständerna sammankallas (1789)", 1789, French),
        EventCard::new("f1789-national", "Nationalförsamlingen bildas (1789)", 1789, French),
        EventCard::new("f1789-bastille", "Stormningen av Bastiljen (1789)", 1789, French),
        EventCard::new(
            "f1789-rights",
            "Människans och medborgarens rättigheter antas (1789)",
            1789,
            French,
        ),
        EventCard::new("f1789-women", "Kvinnornas marsch till Versailles (1789)", 1789, French),
        EventCard::new("f1793-terror", "Skräckväldet inleds (1793)", 1793, French),
        EventCard::new("f1793-king", "Kungen avrättas (1793)", 1793, French),
        EventCard::new("f1799-napoleon", "Napoleon tar makten (1799)", 1799, French),
    ]
}

//=== Cause Cards =========================================================

/// The 12 cause-chain cards.
pub fn default_cause_cards() -> Vec<CauseCard> {
    use Chain::{Bread, Enlightenment, Representation, Taxation};
    use Role::{Cause, Consequence, LongTerm};

    vec![
        //--- Taxation -----------------------------------------------------
        CauseCard::new("c1-tax", "Höga skatter", Cause, Taxation),
        CauseCard::new("c7-declaration", "Självständighetsförklaringen antas", Consequence, Taxation),
        CauseCard::new(
            "c16-usa-model",
            "USA blir förebild för andra demokratiska stater",
            LongTerm,
            Taxation,
        ),

        //--- Representation -----------------------------------------------
        CauseCard::new("c2-influence", "Brist på inflytande", Cause, Representation),
        CauseCard::new("c9-power", "Makt till folket", Consequence, Representation),
        CauseCard::new("c12-democracy", "Spridning av demokratiska idéer", LongTerm, Representation),

        //--- Bread --------------------------------------------------------
        CauseCard::new("c5-bread", "Inflation och höga brödpriser", Cause, Bread),
        CauseCard::new("c8-bastille", "Stormningen av Bastiljen", Consequence, Bread),
        CauseCard::new("c15-classes", "Ståndssamhället försvagas eller avskaffas", LongTerm, Bread),

        //--- Enlightenment ------------------------------------------------
        CauseCard::new("c3-enlightenment", "Inspiration från Upplysningen", Cause, Enlightenment),
        CauseCard::new(
            "c11-rights",
            "Människors lika rättigheter skrivs ner",
            Consequence,
            Enlightenment,
        ),
        CauseCard::new(
            "c13-constitutions",
            "Nya författningar och konstitutioner",
            LongTerm,
            Enlightenment,
        ),
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::{chronological_order, CardId};
    use std::collections::HashSet;

    #[test]
    fn timeline_dataset_has_unique_ids() {
        let events = default_timeline_events();
        let ids: HashSet<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(events.len(), 18);
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn timeline_canonical_order_breaks_1789_ties_by_label() {
        let order = chronological_order(&default_timeline_events());
        let pos = |id| order.iter().position(|x| *x == CardId(id));

        assert_eq!(order[0], CardId("e1763-war"));
        assert_eq!(order[17], CardId("f1799-napoleon"));
        assert!(pos("f1789-estates") < pos("f1789-women"));
        assert!(pos("f1789-women") < pos("f1789-rights"));
        assert!(pos("f1789-rights") < pos("f1789-national"));
        assert!(pos("f1789-national") < pos("f1789-bastille"));
        assert!(pos("f1793-king") < pos("f1793-terror"));
    }

    #[test]
    fn cause_dataset_fills_each_grid_slot_once() {
        let cards = default_cause_cards();
        let slots: HashSet<_> = cards.iter().map(|c| (c.role, c.chain)).collect();
        assert_eq!(cards.len(), Role::ALL.len() * Chain::ALL.len());
        assert_eq!(slots.len(), cards.len());
    }
}
