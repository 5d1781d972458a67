// Validating a list-query request
//
// Run with: RUST_LOG=paramguard_core=trace cargo run --example request_params --features full

use paramguard::paramguard_config::Settings;
use paramguard::prelude::*;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

const LIST_MAX_COUNT: i64 = 100;

fn request() -> HashMap<String, String> {
    [
        ("orgId", "1"),
        ("status", "DELETED"),
        ("ids", "1,3"),
        ("keywords", "booldesign"),
        ("pageNum", "1"),
        ("pageSize", "10"),
        ("username", "gegeg122"),
        ("password", "$$$$$$$a"),
        ("idCardCode", "110103200301013718"),
        ("email", "booldesign@163.com"),
        ("mobile", "13501691436"),
        ("isSync", "true"),
        ("userIds", "1,2,4,q,5"),
        ("cids", "1,2,4,2,4,5"),
        ("birthday", "2010-01-01"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn fields(presets: &Presets) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("orgId", "组织机构id")
            .required()
            .integer()
            .min(Bound::Int(1)),
        FieldSpec::new("status", "状态").one_of(["DELETED", "ENABLED", "DISABLED"]),
        FieldSpec::new("ids", "显示列表编号").array_in(",", Members::ints([1, 2, 3])),
        FieldSpec::new("keywords", "关键词")
            .required()
            .filter_chars(["%", "_"]),
        FieldSpec::new("sort", "排序").array_in(
            ",",
            Members::strings(["id", "username", "realName"]),
        ),
        FieldSpec::new("pageNum", "页号")
            .min(Bound::Int(1))
            .max(Bound::Int(100)),
        FieldSpec::new("pageSize", "每页记录条数").between(Range::int(-1, LIST_MAX_COUNT)),
        FieldSpec::new("username", "用户名")
            .required()
            .satisfies(presets.username()),
        FieldSpec::new("password", "密码")
            .required()
            .satisfies(presets.password()),
        FieldSpec::new("idCardCode", "身份证号码").satisfies(presets.id_card_number()),
        FieldSpec::new("email", "邮箱").matches(presets.email()),
        FieldSpec::new("mobile", "手机号")
            .required()
            .matches(presets.mobile()),
        FieldSpec::new("isSync", "是否同步").required().boolean(),
        FieldSpec::new("userIds", "用户ids").distinct(","),
        FieldSpec::new("cids", "ids").satisfies(presets.id_list()),
        FieldSpec::new("birthday", "生日").satisfies(presets.birthday()),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_env_vars([("PARAMGUARD_LOCALE", "zh-cn")])?;
    tracing::info!(locale = ?settings.locale, "Loaded settings");

    let toolkit = settings.build()?;
    let plan = toolkit.validator.compile(&fields(&toolkit.presets))?;
    tracing::info!(fields = plan.len(), "Compiled request plan");

    let mut params = request();
    match plan.run_map(&params) {
        Ok(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        Err(err) => println!("{}", serde_json::to_string_pretty(&err.to_json())?),
    }

    // The same plan rejects a page size above the limit
    params.insert("pageSize".to_string(), "150".to_string());
    match plan.run_map(&params) {
        Ok(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        Err(err) => println!("{}", serde_json::to_string_pretty(&err.to_json())?),
    }

    Ok(())
}
