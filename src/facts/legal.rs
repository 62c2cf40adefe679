//! Legal and administrative facts.

use serde::{Deserialize, Serialize};

use super::{CostBearer, FeePayer, Permission, YesNo};

fact_enum! {
    GoverningLaw {
        NewYork => "new_york",
        Delaware => "delaware",
        BuyerHomeState => "buyer_home_state",
        ProjectState => "project_state",
        Other => "other",
    }
}

fact_enum! {
    DisputeForum {
        Arbitration => "arbitration",
        MediationThenArbitration => "mediation_then_arbitration",
        Litigation => "litigation",
        MediationThenLitigation => "mediation_then_litigation",
    }
}

fact_enum! {
    Venue {
        BuyerFavorable => "buyer_favorable",
        Neutral => "neutral",
        SellerFavorable => "seller_favorable",
    }
}

fact_enum! {
    ExpertDetermination { YesForTechnical => "yes_for_technical" | "yes", No => "no" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoverningLawFacts {
    pub governing_law: Option<GoverningLaw>,
    pub dispute_resolution: Option<DisputeForum>,
    pub venue: Option<Venue>,
    pub jury_waiver: Option<YesNo>,
    pub expert_determination: Option<ExpertDetermination>,
}

fact_enum! {
    ConfScope {
        NarrowPricingOnly => "narrow_pricing_only",
        StandardAllTerms => "standard_all_terms",
        BroadExistenceIncluded => "broad_existence_included",
    }
}

fact_enum! {
    EsgCarveout { Explicit => "explicit", Implied => "implied", None => "none" }
}

fact_enum! {
    SurvivalPeriod {
        TwoYearsOrLess => "two_years_or_less",
        ThreeToFiveYears => "three_to_five_years",
        Indefinite => "indefinite",
    }
}

fact_enum! {
    MutualObligation { Mutual => "mutual", BuyerOnly => "buyer_only" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfidentialityFacts {
    pub conf_scope: Option<ConfScope>,
    pub esg_reporting_carveout: Option<EsgCarveout>,
    pub regulatory_filing_carveout: Option<YesNo>,
    pub affiliate_disclosure: Option<Permission>,
    pub survival_period: Option<SurvivalPeriod>,
    pub mutual_obligation: Option<MutualObligation>,
}

fact_enum! {
    OutputExclusivity {
        FullProjectCommitted => "full_project_committed",
        PartialProject => "partial_project",
    }
}

fact_enum! {
    BuyerExclusivity { None => "none", LimitedSameIso => "limited_same_iso", Broad => "broad" }
}

fact_enum! {
    AttributeExclusivity { AllToBuyer => "all_to_buyer", SomeRetained => "some_retained" }
}

fact_enum! {
    NegotiationExclusivity {
        None => "none",
        TimeLimited => "time_limited",
        OpenEnded => "open_ended",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExclusivityFacts {
    pub seller_output_exclusivity: Option<OutputExclusivity>,
    pub buyer_exclusivity: Option<BuyerExclusivity>,
    pub attribute_exclusivity: Option<AttributeExclusivity>,
    pub negotiation_exclusivity: Option<NegotiationExclusivity>,
}

fact_enum! {
    LegalFees { EachOwn => "each_own", Shared => "shared", BuyerBears => "buyer_bears" }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseFacts {
    pub legal_fees: Option<LegalFees>,
    pub ongoing_admin_costs: Option<CostBearer>,
    pub registry_fees: Option<FeePayer>,
    pub ie_and_study_costs: Option<CostBearer>,
}

fact_enum! {
    AccountingReps { BothParties => "both_parties", BuyerOnly => "buyer_only", None => "none" }
}

fact_enum! {
    HedgeLanguage {
        SupportiveStructure => "supportive_structure",
        Neutral => "neutral",
        ProblematicFeatures => "problematic_features",
    }
}

fact_enum! {
    TaxIndemnity { Mutual => "mutual", OneWayBuyer => "one_way_buyer", None => "none" }
}

fact_enum! {
    AccountingChangeRelief {
        NoRelief => "no_relief",
        Reopener => "reopener",
        TerminationRight => "termination_right",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountingFacts {
    pub accounting_representations: Option<AccountingReps>,
    pub hedge_accounting_language: Option<HedgeLanguage>,
    pub tax_indemnity: Option<TaxIndemnity>,
    pub change_in_accounting_treatment: Option<AccountingChangeRelief>,
}

fact_enum! {
    JointAnnouncement {
        YesMutualApproval => "yes_mutual_approval",
        NotificationOnly => "notification_only",
        NoRestriction => "no_restriction",
    }
}

fact_enum! {
    BuyerPublicityRight {
        BroadEsgMarketing => "broad_esg_marketing",
        LimitedWithApproval => "limited_with_approval",
        Restricted => "restricted",
    }
}

fact_enum! {
    SellerUseOfName {
        ProhibitedWithoutConsent => "prohibited_without_consent",
        PermittedWithNotice => "permitted_with_notice",
        Unrestricted => "unrestricted",
    }
}

fact_enum! {
    LogoRestriction {
        PriorWrittenConsent => "prior_written_consent",
        Permitted => "permitted",
        NotAddressed => "not_addressed",
    }
}

fact_enum! {
    ApprovalProcess {
        PriorWrittenConsent => "prior_written_consent",
        ReasonableAdvanceNotice => "reasonable_advance_notice",
        NoProcess => "no_process",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicityFacts {
    pub joint_announcement_required: Option<JointAnnouncement>,
    pub buyer_publicity_right: Option<BuyerPublicityRight>,
    pub seller_use_of_buyer_name: Option<SellerUseOfName>,
    pub logo_trademark_restriction: Option<LogoRestriction>,
    pub approval_process: Option<ApprovalProcess>,
}
