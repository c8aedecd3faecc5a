//! Fixed content for the demo: a services agreement between Nexora
//! Technologies and Altavia Retail Group, with the annotations, facts,
//! insights and discussion threads the product would surface for it.
//!
//! The term and cure-period pills in clauses 4.1 and 4.2 point at
//! `duration-term` and `duration-termination-cure`, the ids the facts
//! catalog actually carries, so every pill resolves.

use crate::demo::models::{
    Block, ClauseContent, ClauseNode, Definition, Fact, FactCategory, FactIcon, Inline, Insight,
    InsightType, Loop, LoopMessage, LoopStatus, Pill, PillCategory,
};

/// Categories shown expanded when the facts tab first opens.
pub const DEFAULT_EXPANDED_CATEGORIES: &[(&str, bool)] = &[
    ("parties", true),
    ("legal", true),
    ("constraints", true),
    ("amounts", false),
    ("dates", false),
];

pub fn outline() -> Vec<ClauseNode> {
    vec![
        ClauseNode::branch("clause-1", "1", "Definitions", vec![
            ClauseNode::leaf("clause-1-1", "1.1", "Interpretation"),
            ClauseNode::leaf("clause-1-2", "1.2", "Key Definitions"),
        ]),
        ClauseNode::branch("clause-2", "2", "Services", vec![
            ClauseNode::leaf("clause-2-1", "2.1", "Scope of Services"),
            ClauseNode::leaf("clause-2-2", "2.2", "Service Levels"),
        ]),
        ClauseNode::branch("clause-3", "3", "Fees and Payment", vec![
            ClauseNode::leaf("clause-3-1", "3.1", "Fee Structure"),
            ClauseNode::leaf("clause-3-2", "3.2", "Invoices and Late Payment"),
        ]),
        ClauseNode::branch("clause-4", "4", "Term and Termination", vec![
            ClauseNode::leaf("clause-4-1", "4.1", "Term"),
            ClauseNode::leaf("clause-4-2", "4.2", "Termination for Cause"),
        ]),
        ClauseNode::branch("clause-5", "5", "Confidentiality and Data Protection", vec![
            ClauseNode::leaf("clause-5-1", "5.1", "Confidential Information"),
            ClauseNode::leaf("clause-5-2", "5.2", "Data Protection"),
        ]),
        ClauseNode::branch("clause-6", "6", "Liability and Indemnity", vec![
            ClauseNode::leaf("clause-6-1", "6.1", "Limitation of Liability"),
            ClauseNode::leaf("clause-6-2", "6.2", "Indemnity"),
        ]),
        ClauseNode::leaf("clause-7", "7", "Insurance"),
        ClauseNode::branch("clause-8", "8", "Miscellaneous", vec![
            ClauseNode::leaf("clause-8-1", "8.1", "Notices"),
            ClauseNode::leaf("clause-8-2", "8.2", "Governing Law"),
        ]),
        ClauseNode::leaf("schedule-1", "Schedule 1", "Service Description"),
        ClauseNode::leaf("schedule-2", "Schedule 2", "Fees & Service Credits"),
    ]
}

pub fn definitions() -> Vec<Definition> {
    let def = |id, term, definition, used_in| Definition { id, term, definition, used_in: Some(used_in) };
    vec![
        def("def-1", "Service Hours", "08:00 – 18:00 CET on Business Days", "clause-2-2"),
        def("def-2", "Business Days", "Any day except Saturday, Sunday, or public holiday in France", "clause-1-2"),
        def("def-3", "Availability Target", "Monthly percentage of uptime measured per Schedule 1", "clause-2-2"),
        def("def-4", "Service Credits", "Credits owed when Service Levels not met", "clause-2-2"),
        def("def-5", "Confidential Information", "Any non-public business, technical or financial information", "clause-5-1"),
        def("def-6", "Personal Data", "Information relating to an identified or identifiable person (GDPR)", "clause-5-2"),
        def("def-7", "Effective Date", "1 March 2025", "clause-4-1"),
        def("def-service-provider", "Service Provider", "Nexora Technologies Ltd.", "clause-1-2"),
        def("def-client", "Client", "Altavia Retail Group SA", "clause-1-2"),
    ]
}

struct FactRow {
    id: &'static str,
    label: &'static str,
    value: &'static str,
    source: &'static str,
    party: Option<&'static str>,
    confidence: (u8, u8),
    insight: Option<&'static str>,
}

impl From<FactRow> for Fact {
    fn from(row: FactRow) -> Self {
        Fact {
            id: row.id,
            label: row.label,
            value: row.value,
            source: row.source,
            party: row.party,
            semantic_confidence: row.confidence.0,
            cross_ref_confidence: row.confidence.1,
            related_insight_id: row.insight,
        }
    }
}

fn row(id: &'static str, label: &'static str, value: &'static str, source: &'static str, confidence: (u8, u8)) -> FactRow {
    FactRow { id, label, value, source, party: None, confidence, insight: None }
}

impl FactRow {
    fn party(mut self, party: &'static str) -> Self {
        self.party = Some(party);
        self
    }

    fn insight(mut self, insight_id: &'static str) -> Self {
        self.insight = Some(insight_id);
        self
    }
}

fn category(id: &'static str, title: &'static str, icon: FactIcon, rows: Vec<FactRow>) -> FactCategory {
    FactCategory { id, title, icon, items: rows.into_iter().map(Fact::from).collect() }
}

pub fn fact_categories() -> Vec<FactCategory> {
    vec![
        category("parties", "Parties", FactIcon::Users, vec![
            row("fact-party-service-provider", "Service Provider", "Nexora Technologies Ltd.", "Preamble", (96, 90)),
            row("fact-party-client", "Client", "Altavia Retail Group SA", "Preamble", (95, 83)),
        ]),
        category("legal", "Legal Context", FactIcon::Scale, vec![
            row("fact-legal-governing-law", "Governing Law", "France", "Clause 8.2", (97, 92)),
            row("fact-legal-jurisdiction", "Jurisdiction", "Paris Commercial Court", "Clause 8.2", (94, 84)),
        ]),
        category("constraints", "Constraints & Limits", FactIcon::Shield, vec![
            row("constraint-liability", "Liability Cap", "≤ € 1 000 000 per 12 months", "6.1", (93, 89)).party("Both"),
            row("constraint-availability", "Availability Target", "≥ 99.9 % monthly", "2.2", (92, 88))
                .party("Service Provider")
                .insight("sug-3"),
            row("constraint-response-p1", "Response Time (P1)", "≤ 30 minutes", "Schedule 2", (90, 87))
                .party("Service Provider")
                .insight("sug-1"),
            row("constraint-payment", "Payment Term", "≤ 30 days from invoice", "3.2", (90, 85)).party("Client"),
            row("constraint-interest", "Interest Rate", "ECB base rate + 5 %", "3.2", (88, 84)).party("Client"),
            row("constraint-data-transfer", "Data Transfer Mechanism", "Must use EU‑approved mechanism", "5.2", (86, 82))
                .party("Service Provider")
                .insight("sug-2"),
        ]),
        category("amounts", "Amounts & Rates", FactIcon::Dollar, vec![
            row("amount-annual-fee", "Annual Fee", "€ 240 000", "3.1", (94, 90)),
            row("amount-fee-cap", "Fee Cap", "€ 1 200 000 (initial term)", "3.1", (90, 86)),
            row("amount-insurance", "Insurance Coverage", "≥ € 2 000 000 per claim", "7", (82, 78)),
            row("amount-credit-availability", "Availability Credit", "Credit 2 % per 0.1 % drop below 99.9 %", "Schedule 2", (90, 85))
                .party("Service Provider"),
            row("amount-credit-p1", "P1 Response Credit", "Credit 1 % per incident", "Schedule 2", (88, 84))
                .party("Service Provider"),
            row("amount-credit-p2", "P2 Response Credit", "Credit 0.5 % per incident", "Schedule 2", (87, 82))
                .party("Service Provider"),
        ]),
        category("dates", "Dates & Durations", FactIcon::Calendar, vec![
            row("date-effective", "Effective Date", "1 March 2025", "1.2", (98, 95)),
            row("duration-term", "Term", "3 years (auto‑renew 1 year)", "4.1", (90, 86)),
            row("duration-termination", "Termination Notice", "90 days", "4.1", (88, 84)),
            row("duration-termination-cure", "Breach Remedy Period", "30 days", "4.2", (88, 84)),
            row("duration-liability-period", "Liability Cap Period", "12 months", "6.1", (88, 84)),
            row("duration-schedule2-p1", "P1 Response Threshold (Schedule 2)", "≤ 20 minutes", "Schedule 2", (87, 83)),
            row("duration-schedule2-p2", "P2 Response Threshold (Schedule 2)", "≤ 2 hours", "Schedule 2", (86, 82)),
            row("compliance-gdpr", "GDPR Transfer Clause Required", "Yes (missing)", "5.2", (80, 76)),
        ]),
    ]
}

pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            id: "sug-1",
            title: "Reduce P1 response time to 20 minutes",
            explanation: "Industry benchmark for P1 incidents is 15–30 min. Current 30 min meets minimum but exceeds median. Reducing to 20 min aligns with Schedule 2 and qualifies for Premium Support. Cost impact: +3%.",
            clause: "clause-2-2",
            kind: InsightType::Optimization,
            target_fact_id: Some("constraint-response-p1"),
        },
        Insight {
            id: "sug-2",
            title: "Add GDPR Art. 46 transfer clause",
            explanation: "Missing explicit reference to international data transfer mechanism required under GDPR Art. 46. Recommend adding Standard Contractual Clauses (SCCs) or adequacy decision reference.",
            clause: "clause-5-2",
            kind: InsightType::Compliance,
            target_fact_id: Some("constraint-data-transfer"),
        },
        Insight {
            id: "sug-3",
            title: "Align Schedule 2 availability with Clause 2.2",
            explanation: "Schedule 2 references 99.95% availability target, but Clause 2.2 states 99.9%. This creates contractual ambiguity. Recommend standardizing to 99.9% across both documents.",
            clause: "clause-2-2",
            kind: InsightType::Consistency,
            target_fact_id: Some("constraint-availability"),
        },
        Insight {
            id: "sug-4",
            title: "Define \"Service Window\" term",
            explanation: "Term \"Service Window\" used in Clause 2.2 but not defined. Creates interpretation risk. Recommend adding definition in Clause 1.2 or cross-referencing \"Service Hours\".",
            clause: "clause-2-2",
            kind: InsightType::Risk,
            target_fact_id: None,
        },
    ]
}

fn msg(id: &'static str, user_id: &'static str, user_name: &'static str, content: &'static str, timestamp: &'static str) -> LoopMessage {
    LoopMessage { id, user_id, user_name, is_ai: user_id == "ai", content, timestamp }
}

pub fn loops() -> Vec<Loop> {
    vec![
        Loop {
            id: "loop-1",
            title: "Scope of Services Discussion",
            status: LoopStatus::Open,
            updated_at: "30 min ago",
            messages: vec![
                msg("msg-1", "sarah", "Sarah K.", "Looking at Clause 2.2 - the 99.9% availability target. What happens if we miss this?", "5h ago"),
                msg("msg-2", "ai", "LexAI", "Credits are 2% of monthly fees per 0.1% drop below target. Falls to 99.5%? That's 8% back to the client.", "5h ago"),
                msg("msg-3", "michael", "Michael T.", "Our platform had 99.7% uptime last quarter. This target is aggressive.", "4h ago"),
                msg("msg-4", "john", "John D.", "From legal side - 99.9% is market standard for B2B SaaS.", "4h ago"),
            ],
        },
        Loop {
            id: "loop-2",
            title: "Liability Cap Analysis",
            status: LoopStatus::Open,
            updated_at: "1.5h ago",
            messages: vec![
                msg("msg-5", "john", "John D.", "The €1M liability cap is only 83% of our total contract value.", "7h ago"),
                msg("msg-6", "emma", "Emma K.", "Why is that a problem? Isn't any cap protecting us?", "6h ago"),
                msg("msg-7", "ai", "LexAI", "For enterprise SaaS, typical caps are 1-3x annual fees. Your €1M is above the high end.", "5h ago"),
            ],
        },
        Loop {
            id: "loop-3",
            title: "Payment Terms & Termination",
            status: LoopStatus::Open,
            updated_at: "30 min ago",
            messages: vec![
                msg("msg-8", "emma", "Emma K.", "Payment terms are 30 days net. Is that standard?", "3h ago"),
                msg("msg-9", "sarah", "Sarah K.", "30 days is standard for B2B. We could ask for 45 or 60.", "2h ago"),
            ],
        },
    ]
}

fn t(text: &'static str) -> Inline {
    Inline::Text { text }
}

fn term(label: &'static str, definition_id: &'static str) -> Inline {
    Inline::Pill(Pill {
        category: PillCategory::Definition,
        label,
        definition_id: Some(definition_id),
        fact_id: None,
        insight_id: None,
    })
}

fn fact(category: PillCategory, label: &'static str, fact_id: &'static str) -> Inline {
    Inline::Pill(Pill { category, label, definition_id: None, fact_id: Some(fact_id), insight_id: None })
}

fn fact_with_insight(category: PillCategory, label: &'static str, fact_id: &'static str, insight_id: &'static str) -> Inline {
    Inline::Pill(Pill {
        category,
        label,
        definition_id: None,
        fact_id: Some(fact_id),
        insight_id: Some(insight_id),
    })
}

fn clause(id: &str, number: &str, title: &str, content: Vec<Block>) -> ClauseContent {
    ClauseContent { id: id.to_string(), number: number.to_string(), title: title.to_string(), content }
}

pub fn clause_contents() -> Vec<ClauseContent> {
    use Block::{Bullets, Heading, Paragraph};
    use PillCategory::{Amount, Date, Definition as Def, Duration, Percentage};

    vec![
        clause("preamble", "", "Preamble", vec![
            Paragraph(vec![
                t("This Master Services Agreement (the \"Agreement\") is entered into as of "),
                fact(Date, "1 March 2025", "date-effective"),
                t(" (the \"Effective Date\") by and between:"),
            ]),
            Paragraph(vec![
                fact(Def, "Nexora Technologies Ltd.", "fact-party-service-provider"),
                t(", a company incorporated in France, with registered office at 45 Avenue des Champs-Élysées, 75008 Paris (\"Service Provider\"); and"),
            ]),
            Paragraph(vec![
                fact(Def, "Altavia Retail Group SA", "fact-party-client"),
                t(", a company incorporated in France, with registered office at 12 Rue de la Paix, 75002 Paris (\"Client\")."),
            ]),
            Paragraph(vec![t("Together referred to as the \"Parties\" and individually as a \"Party\".")]),
        ]),
        clause("clause-1-1", "1.1", "Interpretation", vec![
            Paragraph(vec![t("In this Agreement, unless the context otherwise requires:")]),
            Bullets(vec![
                vec![t("references to \"Clauses\" and \"Schedules\" are to clauses and schedules of this Agreement;")],
                vec![t("words importing the singular include the plural and vice versa;")],
                vec![t("headings are for convenience only and shall not affect interpretation.")],
            ]),
            Paragraph(vec![t("Defined terms used throughout are detailed in Schedule 1 and Clause 1.2.")]),
        ]),
        clause("clause-1-2", "1.2", "Key Definitions", vec![
            Paragraph(vec![t("\""), term("Service Hours", "def-1"), t("\" means 08:00 – 18:00 CET on "), term("Business Days", "def-2"), t(".")]),
            Paragraph(vec![t("\""), term("Business Days", "def-2"), t("\" means any day other than a Saturday, Sunday, or public holiday in France.")]),
            Paragraph(vec![t("\""), term("Availability Target", "def-3"), t("\" means the monthly percentage of uptime measured per Schedule 1.")]),
            Paragraph(vec![t("\""), term("Service Credits", "def-4"), t("\" means credits owed to the Client when Service Levels are not met as detailed in Schedule 2.")]),
            Paragraph(vec![t("\""), term("Effective Date", "def-7"), t("\" means 1 March 2025.")]),
        ]),
        clause("clause-2-1", "2.1", "Scope of Services", vec![
            Paragraph(vec![
                t("The "),
                term("Service Provider", "def-service-provider"),
                t(" shall host, operate, and maintain the "),
                term("Client", "def-client"),
                t("'s retail analytics platform described in Schedule 1, ensuring continuous availability, performance, and data security."),
            ]),
        ]),
        clause("clause-2-2", "2.2", "Service Levels", vec![
            Paragraph(vec![
                t("The Provider shall maintain system availability of at least "),
                fact_with_insight(Percentage, "99.9%", "constraint-availability", "sug-3"),
                t(", during "),
                term("Service Hours", "def-1"),
                t(" on a monthly basis. Response time for Priority 1 incidents shall not exceed "),
                fact_with_insight(Duration, "30 minutes", "constraint-response-p1", "sug-1"),
                t(", as stated in Schedule 2."),
            ]),
            Paragraph(vec![
                t("Should the Provider fail to meet these Service Levels, "),
                term("Service Credits", "def-4"),
                t(" shall apply in accordance with Schedule 2."),
            ]),
        ]),
        clause("clause-3-1", "3.1", "Fee Structure", vec![
            Paragraph(vec![
                t("The "),
                term("Client", "def-client"),
                t(" shall pay the "),
                term("Service Provider", "def-service-provider"),
                t(" an annual service fee of "),
                fact(Amount, "€ 240,000", "amount-annual-fee"),
                t(", as set out in Schedule 2, payable quarterly in arrears. Total fees for the initial term shall not exceed "),
                fact(Amount, "€ 1,200,000", "amount-fee-cap"),
                t(" unless otherwise agreed in writing."),
            ]),
        ]),
        clause("clause-3-2", "3.2", "Invoices and Late Payment", vec![
            Paragraph(vec![
                t("Invoices are due within "),
                fact(Duration, "thirty (30) days", "constraint-payment"),
                t(" of receipt. Late payments shall bear interest at the European Central Bank base rate plus "),
                fact(Percentage, "5%", "constraint-interest"),
                t("."),
            ]),
        ]),
        clause("clause-4-1", "4.1", "Term", vec![
            Paragraph(vec![
                t("This Agreement shall commence on the "),
                term("Effective Date", "def-7"),
                t(" and continue for an initial period of "),
                fact(Duration, "three (3) years", "duration-term"),
                t(", renewing automatically for successive "),
                fact(Duration, "one-year terms", "duration-term"),
                t(" unless terminated by either party with "),
                fact(Duration, "ninety (90) days", "duration-termination"),
                t(" written notice prior to the end of the then-current term."),
            ]),
        ]),
        clause("clause-4-2", "4.2", "Termination for Cause", vec![
            Paragraph(vec![
                t("Either party may terminate this Agreement immediately upon written notice if the other party materially breaches this Agreement and fails to remedy such breach within "),
                fact(Duration, "thirty (30) days", "duration-termination-cure"),
                t(" of notice, or becomes insolvent or enters liquidation."),
            ]),
        ]),
        clause("clause-5-1", "5.1", "Confidential Information", vec![
            Paragraph(vec![
                t("Each party shall treat all "),
                term("Confidential Information", "def-5"),
                t(" received from the other as strictly confidential and shall not disclose it to any third party except to employees or contractors bound by equivalent obligations."),
            ]),
        ]),
        clause("clause-5-2", "5.2", "Data Protection", vec![
            Paragraph(vec![
                t("Each party shall comply with GDPR (EU 2016/679). The "),
                term("Service Provider", "def-service-provider"),
                t(" acts as Processor with respect to the "),
                term("Client", "def-client"),
                t("'s "),
                term("Personal Data", "def-6"),
                t(" and shall process such data only on documented instructions."),
            ]),
        ]),
        clause("clause-6-1", "6.1", "Limitation of Liability", vec![
            Paragraph(vec![
                t("The aggregate liability of either party under this Agreement shall not exceed "),
                fact(Amount, "€ 1,000,000", "constraint-liability"),
                t(" in any twelve (12) month period."),
            ]),
        ]),
        clause("clause-6-2", "6.2", "Indemnity", vec![
            Paragraph(vec![t("Each party shall indemnify the other against all losses arising from any breach of this Agreement or negligent acts, subject to the limitations in Clause 6.1.")]),
        ]),
        clause("clause-7", "7", "Insurance", vec![
            Paragraph(vec![
                t("The "),
                term("Service Provider", "def-service-provider"),
                t(" shall maintain professional indemnity insurance of at least "),
                fact(Amount, "€ 2,000,000", "amount-insurance"),
                t(" per claim throughout the term of this Agreement."),
            ]),
        ]),
        clause("clause-8-1", "8.1", "Notices", vec![
            Paragraph(vec![t("All notices under this Agreement shall be in writing and delivered by hand, registered post, or email to the addresses specified in Schedule 3.")]),
        ]),
        clause("clause-8-2", "8.2", "Governing Law", vec![
            Paragraph(vec![
                t("This Agreement shall be governed by and construed in accordance with the laws of "),
                fact(Def, "France", "fact-legal-governing-law"),
                t(". Any disputes shall be submitted to the exclusive jurisdiction of the "),
                fact(Def, "Paris Commercial Court", "fact-legal-jurisdiction"),
                t("."),
            ]),
        ]),
        clause("schedule-1", "Schedule 1", "Service Description", vec![
            Heading(vec![t("1. Platform Overview")]),
            Paragraph(vec![
                t("The "),
                term("Service Provider", "def-service-provider"),
                t(" shall provide, host, and maintain a cloud-based retail analytics platform comprising:"),
            ]),
            Bullets(vec![
                vec![t("Real-time sales dashboard and reporting")],
                vec![t("Inventory management integration")],
                vec![t("Customer behavior analytics")],
                vec![t("Predictive demand forecasting")],
            ]),
            Heading(vec![t("2. Availability Measurement")]),
            Paragraph(vec![
                t("The "),
                term("Availability Target", "def-3"),
                t(" shall be calculated as: (Total Minutes in Month - Downtime Minutes) / Total Minutes in Month × 100."),
            ]),
            Paragraph(vec![t("Scheduled maintenance windows (notified 48 hours in advance) are excluded from downtime calculations.")]),
        ]),
        clause("schedule-2", "Schedule 2", "Fees & Service Credits", vec![
            Heading(vec![t("1. Fee Structure")]),
            Paragraph(vec![
                t("Annual platform fee: "),
                fact(Amount, "€ 240,000", "amount-annual-fee"),
                t(", payable quarterly in arrears."),
            ]),
            Heading(vec![t("2. Service Level Targets")]),
            Bullets(vec![
                vec![
                    t("System Availability: "),
                    fact_with_insight(Percentage, "≥ 99.9%", "constraint-availability", "sug-3"),
                    t(" monthly"),
                ],
                vec![t("P1 Response Time: "), fact(Duration, "≤ 20 minutes", "duration-schedule2-p1")],
                vec![t("P2 Response Time: "), fact(Duration, "≤ 2 hours", "duration-schedule2-p2")],
            ]),
            Heading(vec![t("3. Service Credits")]),
            Bullets(vec![
                vec![fact(Amount, "Credit 2% per 0.1% drop", "amount-credit-availability"), t(" below availability target")],
                vec![fact(Amount, "Credit 1% per P1 incident", "amount-credit-p1"), t(" exceeding response threshold")],
                vec![fact(Amount, "Credit 0.5% per P2 incident", "amount-credit-p2"), t(" exceeding response threshold")],
            ]),
            Paragraph(vec![t("Maximum monthly credit: 15% of monthly fees. Credits applied to next invoice.")]),
        ]),
    ]
}
