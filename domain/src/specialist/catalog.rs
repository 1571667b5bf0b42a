//! Static evaluation framework catalog
//!
//! The full panel: 109 sub-parameters across 7 clusters. Each row carries the
//! relative weight of the sub-parameter inside its parameter group and the
//! sub-parameter names it depends on. Dependency names are resolved against
//! the whole catalog at registry build time; three of them ("Technical
//! Feasibility", "Operational Viability", "Financial Viability") reference
//! parameter-level names and are reported as dangling by the registry, which
//! plans them as dependency-free.

/// One row of the evaluation framework.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub cluster: &'static str,
    pub parameter: &'static str,
    pub sub_parameter: &'static str,
    pub weight: f64,
    pub dependencies: &'static [&'static str],
}

const fn e(
    cluster: &'static str,
    parameter: &'static str,
    sub_parameter: &'static str,
    weight: f64,
    dependencies: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        cluster,
        parameter,
        sub_parameter,
        weight,
        dependencies,
    }
}

/// The complete evaluation framework, in declaration order.
pub const CATALOG: &[CatalogEntry] = &[
    // ==================== Core Idea ====================
    e("Core Idea", "Novelty & Uniqueness", "Originality", 30.0, &["Innovation Index"]),
    e("Core Idea", "Novelty & Uniqueness", "Differentiation", 25.0, &["Market Gap Analysis"]),
    e("Core Idea", "Novelty & Uniqueness", "Innovation Index", 25.0, &[]),
    e("Core Idea", "Novelty & Uniqueness", "Disruptive Potential", 20.0, &["Technology Maturity"]),
    e("Core Idea", "Problem-Solution Fit", "Problem Severity", 25.0, &[]),
    e("Core Idea", "Problem-Solution Fit", "Solution Effectiveness", 25.0, &["Technical Feasibility"]),
    e("Core Idea", "Problem-Solution Fit", "Market Gap Analysis", 20.0, &["Market Size (TAM)"]),
    e("Core Idea", "Problem-Solution Fit", "Customer Pain Validation", 15.0, &["User Engagement"]),
    e("Core Idea", "Problem-Solution Fit", "Solution Uniqueness", 15.0, &["Originality"]),
    e("Core Idea", "UX/Usability Potential", "Intuitive Design", 30.0, &[]),
    e("Core Idea", "UX/Usability Potential", "Accessibility Compliance", 25.0, &["Regulatory Landscape"]),
    e("Core Idea", "UX/Usability Potential", "User Interface Quality", 20.0, &["Intuitive Design"]),
    e("Core Idea", "UX/Usability Potential", "Mobile Responsiveness", 15.0, &[]),
    e("Core Idea", "UX/Usability Potential", "Cross-Platform Compatibility", 10.0, &["Technical Architecture"]),
    // ==================== Market Opportunity ====================
    e("Market Opportunity", "Market Validation", "Market Size (TAM)", 25.0, &[]),
    e("Market Opportunity", "Market Validation", "Competitive Intensity", 20.0, &["Market Size (TAM)"]),
    e("Market Opportunity", "Market Validation", "Market Growth Rate", 20.0, &["Market Size (TAM)"]),
    e("Market Opportunity", "Market Validation", "Customer Acquisition Potential", 15.0, &["User Engagement"]),
    e("Market Opportunity", "Market Validation", "Market Penetration Strategy", 10.0, &["Cultural Adaptation"]),
    e("Market Opportunity", "Market Validation", "Timing & Market Readiness", 10.0, &["Infrastructure Readiness"]),
    e("Market Opportunity", "Regional Fit", "Regulatory Landscape", 25.0, &[]),
    e("Market Opportunity", "Regional Fit", "Infrastructure Readiness", 25.0, &[]),
    e("Market Opportunity", "Regional Fit", "Local Market Understanding", 20.0, &["Cultural Adaptation"]),
    e("Market Opportunity", "Regional Fit", "Cultural Adaptation", 15.0, &[]),
    e("Market Opportunity", "Regional Fit", "Regional Expansion Potential", 15.0, &["Infrastructure Readiness"]),
    e("Market Opportunity", "Product-Market Fit", "User Engagement", 20.0, &["Intuitive Design"]),
    e("Market Opportunity", "Product-Market Fit", "Retention Potential", 20.0, &["Product Stickiness"]),
    e("Market Opportunity", "Product-Market Fit", "Customer Satisfaction Metrics", 20.0, &["Solution Effectiveness"]),
    e("Market Opportunity", "Product-Market Fit", "Product Stickiness", 15.0, &["Network Effects"]),
    e("Market Opportunity", "Product-Market Fit", "Market Feedback Integration", 15.0, &["Process Efficiency"]),
    e("Market Opportunity", "Product-Market Fit", "Viral Coefficient", 10.0, &["Network Effects"]),
    // ==================== Execution ====================
    e("Execution", "Technical Feasibility", "Technology Maturity", 20.0, &[]),
    e("Execution", "Technical Feasibility", "Scalability & Performance", 20.0, &["Technology Maturity"]),
    e("Execution", "Technical Feasibility", "Technical Architecture", 15.0, &["Technology Maturity"]),
    e("Execution", "Technical Feasibility", "Development Complexity", 15.0, &["Technical Architecture"]),
    e("Execution", "Technical Feasibility", "Security Framework", 15.0, &["Data Privacy Compliance"]),
    e("Execution", "Technical Feasibility", "API Integration Capability", 15.0, &["Technical Architecture"]),
    e("Execution", "Operational Viability", "Resource Availability", 20.0, &[]),
    e("Execution", "Operational Viability", "Process Efficiency", 20.0, &["Resource Availability"]),
    e("Execution", "Operational Viability", "Supply Chain Management", 15.0, &["Process Efficiency"]),
    e("Execution", "Operational Viability", "Quality Assurance", 15.0, &["Process Efficiency"]),
    e("Execution", "Operational Viability", "Operational Scalability", 15.0, &["Process Efficiency"]),
    e("Execution", "Operational Viability", "Cost Structure Optimization", 15.0, &["Unit Economics"]),
    e("Execution", "Scalability Potential", "Business Model Scalability", 20.0, &["Financial Viability"]),
    e("Execution", "Scalability Potential", "Market Expansion Potential", 20.0, &["Market Size (TAM)"]),
    e("Execution", "Scalability Potential", "Technology Scalability", 15.0, &["Scalability & Performance"]),
    e("Execution", "Scalability Potential", "Operational Scalability", 15.0, &["Process Efficiency"]),
    e("Execution", "Scalability Potential", "Financial Scalability", 15.0, &["Revenue Stream Diversity"]),
    e("Execution", "Scalability Potential", "International Expansion", 15.0, &["Cultural Adaptation"]),
    // ==================== Business Model ====================
    e("Business Model", "Financial Viability", "Revenue Stream Diversity", 20.0, &[]),
    e("Business Model", "Financial Viability", "Profitability & Margins", 20.0, &["Unit Economics"]),
    e("Business Model", "Financial Viability", "Cash Flow Sustainability", 15.0, &["Revenue Stream Diversity"]),
    e("Business Model", "Financial Viability", "Customer Lifetime Value", 15.0, &["Retention Potential"]),
    e("Business Model", "Financial Viability", "Unit Economics", 15.0, &["Revenue Stream Diversity"]),
    e("Business Model", "Financial Viability", "Financial Projections Accuracy", 15.0, &["Market Size (TAM)"]),
    e("Business Model", "Defensibility", "Intellectual Property (IP)", 20.0, &["Originality"]),
    e("Business Model", "Defensibility", "Network Effects", 20.0, &["User Engagement"]),
    e("Business Model", "Defensibility", "Brand Moat", 15.0, &["Differentiation"]),
    e("Business Model", "Defensibility", "Data Moat", 15.0, &["User Engagement"]),
    e("Business Model", "Defensibility", "Switching Costs", 15.0, &["Product Stickiness"]),
    e("Business Model", "Defensibility", "Regulatory Barriers", 15.0, &["Regulatory Landscape"]),
    // ==================== Team ====================
    e("Team", "Founder-Fit", "Relevant Experience", 20.0, &[]),
    e("Team", "Founder-Fit", "Complementary Skills", 20.0, &["Relevant Experience"]),
    e("Team", "Founder-Fit", "Industry Expertise", 15.0, &["Relevant Experience"]),
    e("Team", "Founder-Fit", "Leadership Capability", 15.0, &[]),
    e("Team", "Founder-Fit", "Execution Track Record", 15.0, &["Leadership Capability"]),
    e("Team", "Founder-Fit", "Domain Knowledge", 15.0, &["Industry Expertise"]),
    e("Team", "Culture/Values", "Mission Alignment", 20.0, &[]),
    e("Team", "Culture/Values", "Diversity & Inclusion", 20.0, &[]),
    e("Team", "Culture/Values", "Team Dynamics", 15.0, &["Communication Effectiveness"]),
    e("Team", "Culture/Values", "Communication Effectiveness", 15.0, &[]),
    e("Team", "Culture/Values", "Adaptability", 15.0, &["Team Dynamics"]),
    e("Team", "Culture/Values", "Work Ethics & Values", 15.0, &["Mission Alignment"]),
    // ==================== Compliance ====================
    e("Compliance", "Regulatory", "Data Privacy Compliance", 20.0, &[]),
    e("Compliance", "Regulatory", "Sector-Specific Compliance", 20.0, &["Regulatory Landscape"]),
    e("Compliance", "Regulatory", "Tax Compliance", 15.0, &[]),
    e("Compliance", "Regulatory", "Labor Law Compliance", 15.0, &[]),
    e("Compliance", "Regulatory", "Import/Export Regulations", 15.0, &["Regulatory Landscape"]),
    e("Compliance", "Regulatory", "Digital Services Compliance", 15.0, &["Infrastructure Readiness"]),
    e("Compliance", "Sustainability (ESG)", "Environmental Impact", 20.0, &[]),
    e("Compliance", "Sustainability (ESG)", "Social Impact (SDGs)", 20.0, &[]),
    e("Compliance", "Sustainability (ESG)", "Governance Standards", 15.0, &["Ethical Business Practices"]),
    e("Compliance", "Sustainability (ESG)", "Ethical Business Practices", 15.0, &[]),
    e("Compliance", "Sustainability (ESG)", "Community Engagement", 15.0, &["Social Impact (SDGs)"]),
    e("Compliance", "Sustainability (ESG)", "Carbon Footprint", 15.0, &["Environmental Impact"]),
    e("Compliance", "Ecosystem Support", "Government & Institutional Support", 20.0, &["National Policy Alignment"]),
    e("Compliance", "Ecosystem Support", "Investor & Partner Landscape", 20.0, &[]),
    e("Compliance", "Ecosystem Support", "Startup Ecosystem Integration", 15.0, &["Investor & Partner Landscape"]),
    e("Compliance", "Ecosystem Support", "Mentorship Availability", 15.0, &["Academic Partnerships"]),
    e("Compliance", "Ecosystem Support", "Industry Associations", 15.0, &[]),
    e("Compliance", "Ecosystem Support", "Academic Partnerships", 15.0, &["Academic/Research Contribution"]),
    // ==================== Risk & Strategy ====================
    e("Risk & Strategy", "Risk Assessment", "Technical Risks", 20.0, &["Development Complexity"]),
    e("Risk & Strategy", "Risk Assessment", "Market Risks", 20.0, &["Competitive Intensity"]),
    e("Risk & Strategy", "Risk Assessment", "Financial Risks", 15.0, &["Cash Flow Sustainability"]),
    e("Risk & Strategy", "Risk Assessment", "Competitive Risks", 15.0, &["Competitive Intensity"]),
    e("Risk & Strategy", "Risk Assessment", "Regulatory Risks", 15.0, &["Regulatory Landscape"]),
    e("Risk & Strategy", "Risk Assessment", "Operational Risks", 15.0, &["Operational Viability"]),
    e("Risk & Strategy", "Investor Attractiveness", "Valuation Potential", 20.0, &["Market Size (TAM)"]),
    e("Risk & Strategy", "Investor Attractiveness", "Exit Strategy Viability", 20.0, &["Market Expansion Potential"]),
    e("Risk & Strategy", "Investor Attractiveness", "ROI Potential", 15.0, &["Profitability & Margins"]),
    e("Risk & Strategy", "Investor Attractiveness", "Investment Stage Readiness", 15.0, &["Financial Projections Accuracy"]),
    e("Risk & Strategy", "Investor Attractiveness", "Due Diligence Preparedness", 15.0, &["Governance Standards"]),
    e("Risk & Strategy", "Investor Attractiveness", "Investor Fit", 15.0, &["Investor & Partner Landscape"]),
    e("Risk & Strategy", "Academic/National Alignment", "National Policy Alignment", 20.0, &[]),
    e("Risk & Strategy", "Academic/National Alignment", "Academic/Research Contribution", 20.0, &[]),
    e("Risk & Strategy", "Academic/National Alignment", "Innovation Ecosystem Impact", 15.0, &["Academic/Research Contribution"]),
    e("Risk & Strategy", "Academic/National Alignment", "Knowledge Transfer Potential", 15.0, &["Academic/Research Contribution"]),
    e("Risk & Strategy", "Academic/National Alignment", "Research Commercialization", 15.0, &["Knowledge Transfer Potential"]),
    e("Risk & Strategy", "Academic/National Alignment", "Educational Value", 15.0, &["Academic/Research Contribution"]),
];

/// Slugify a sub-parameter name into an id fragment.
///
/// "Market Size (TAM)" -> "market_size_tam"
pub(crate) fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
