// src/templates/copy.rs
// Fixed marketing copy for the default landing layout.

pub struct Qualification {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct CoreValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub desc: &'static str,
}

pub struct FooterLinkGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const BRAND: &str = "WhaleHub 鲸枢";

pub const HERO_BADGE: &str = "滨江区算力券/模型券备案服务商";
pub const HERO_TITLE: &str = "鲸枢·AIGC算力";
pub const HERO_TITLE_ACCENT: &str = "智能调度公共服务平台";
pub const HERO_TAGLINES: [&str; 2] = [
    "杭州电鲸科技匠心运营 · 链接国产大模型生态 · 助力滨江企业降本增效",
    "打造安全、高效、普惠的区域级AI基础设施底座。",
];
pub const HERO_TRIAL_LABEL: &str = "免费接入测试 →";
pub const HERO_ENQUIRY_LABEL: &str = "企业备案咨询 ↗";

pub const QUALIFICATIONS_TITLE: &str = "合规资质";
pub const QUALIFICATIONS_SUBTITLE: &str = "/ COMPLIANCE & QUALIFICATIONS";

pub const QUALIFICATIONS: [Qualification; 3] = [
    Qualification {
        icon: "🏅",
        title: "专精特新企业",
        desc: "省级专精特新中小企业认定，深耕算力调度技术研发，具备极高的行业专业性与创新能力。",
    },
    Qualification {
        icon: "🛡️",
        title: "高新技术企业",
        desc: "国家级高新技术企业，核心技术自主可控，多项AIGC调度专利，为企业提供技术底座保障。",
    },
    Qualification {
        icon: "📋",
        title: "区经信局备案算力平台",
        desc: "滨江区经信局首批备案AIGC公共服务平台，支持政策资金直达，确保流程合规透明。",
    },
];

pub const CORE_VALUES_TITLE: &str = "核心价值主张";
pub const CORE_VALUES_SUBTITLE: &str = "专业运营团队，助力政企数字化转型";

pub const CORE_VALUES: [CoreValue; 3] = [
    CoreValue {
        icon: "⚡",
        title: "聚合接入",
        subtitle: "MULTI-MODEL INTEGRATION",
        desc: "统一适配阿里通义、百度文心、字节豆包等国产顶尖模型。一套协议，全生态接入，大幅降低研发成本。",
    },
    CoreValue {
        icon: "✅",
        title: "政策合规",
        subtitle: "POLICY COMPLIANCE",
        desc: "毫秒级Token行为审计，支持滨江区算力券实时抵扣。全流程符合国家生成式人工智能管理办法要求。",
    },
    CoreValue {
        icon: "🛠️",
        title: "专业运营",
        subtitle: "PROFESSIONAL OPERATION",
        desc: "电鲸科技提供7×24小时技术保障与专属客服支持。协助企业完成模型备案与算力扶持资金申请。",
    },
];

pub const PARTNERS_TITLE: &str = "深度合作厂商";
pub const PARTNERS_SUBTITLE: &str = "ECOSYSTEM PARTNERS";

pub const PARTNERS: [&str; 6] = ["阿里云", "火山引擎", "百度智能云", "华为昇腾", "腾讯云", "智谱AI"];

pub const FOOTER_LINKS: [FooterLinkGroup; 3] = [
    FooterLinkGroup {
        title: "产品服务",
        items: &["模型广场", "解决方案", "算力调度", "补贴方案"],
    },
    FooterLinkGroup {
        title: "开发者中心",
        items: &["API文档", "SDK下载", "状态监控", "错误码指南"],
    },
    FooterLinkGroup {
        title: "关于与合规",
        items: &["关于电鲸", "资质荣誉", "合规与备案", "服务协议"],
    },
];

pub const COMPANY_LINES: [&str; 2] = [
    "运营主体：杭州电鲸网络科技有限公司",
    "滨江区AIGC算力公共服务平台备案运营商 | 专精特新企业",
];
pub const CONTACT_LINES: [&str; 2] = [
    "地址：杭州市滨江区春风大楼10幢6层",
    "联系电话：0571-81902889",
];
pub const COPYRIGHT: &str = "© 2025 杭州电鲸网络科技有限公司 · All Rights Reserved";

pub const NOTICE_TITLE: &str = "系统公告";
pub const NOTICE_CLOSE_LABEL: &str = "关闭公告";
pub const NOTICE_CLOSE_TODAY_LABEL: &str = "今日关闭";

pub const CONTENT_LOAD_FAILED: &str = "首页内容加载失败";
