//! Built-in property schemas for the AWS resource types this crate knows.
//!
//! Required/optional splits follow the CloudFormation resource reference;
//! property coverage is the set exercised by real templates rather than an
//! exhaustive transcription.

use super::PropShape::{List, Object, Scalar};
use super::{ResourceSpec, SchemaRegistry};

pub(crate) fn builtin_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    // EC2
    registry.register(
        ResourceSpec::new("AWS::EC2::Instance")
            .required("ImageId", Scalar)
            .optional("InstanceType", Scalar)
            .optional("KeyName", Scalar)
            .optional("SecurityGroups", List)
            .optional("SecurityGroupIds", List)
            .optional("SubnetId", Scalar)
            .optional("UserData", Scalar)
            .optional("IamInstanceProfile", Scalar)
            .optional("NetworkInterfaces", List)
            .optional("SourceDestCheck", Scalar)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::SecurityGroup")
            .required("GroupDescription", Scalar)
            .optional("SecurityGroupIngress", List)
            .optional("SecurityGroupEgress", List)
            .optional("VpcId", Scalar)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::VPC")
            .required("CidrBlock", Scalar)
            .optional("EnableDnsSupport", Scalar)
            .optional("EnableDnsHostnames", Scalar)
            .optional("InstanceTenancy", Scalar)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::Subnet")
            .required("VpcId", Scalar)
            .required("CidrBlock", Scalar)
            .optional("AvailabilityZone", Scalar)
            .optional("MapPublicIpOnLaunch", Scalar)
            .optional("Tags", List),
    );
    registry.register(ResourceSpec::new("AWS::EC2::InternetGateway").optional("Tags", List));
    registry.register(
        ResourceSpec::new("AWS::EC2::VPCGatewayAttachment")
            .required("VpcId", Scalar)
            .optional("InternetGatewayId", Scalar)
            .optional("VpnGatewayId", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::RouteTable")
            .required("VpcId", Scalar)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::Route")
            .required("RouteTableId", Scalar)
            .optional("DestinationCidrBlock", Scalar)
            .optional("GatewayId", Scalar)
            .optional("NatGatewayId", Scalar)
            .optional("InstanceId", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::SubnetRouteTableAssociation")
            .required("SubnetId", Scalar)
            .required("RouteTableId", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::NetworkAcl")
            .required("VpcId", Scalar)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::NetworkAclEntry")
            .required("NetworkAclId", Scalar)
            .required("RuleNumber", Scalar)
            .required("Protocol", Scalar)
            .required("RuleAction", Scalar)
            .required("CidrBlock", Scalar)
            .optional("Egress", Scalar)
            .optional("PortRange", Object)
            .optional("Icmp", Object),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::SubnetNetworkAclAssociation")
            .required("SubnetId", Scalar)
            .required("NetworkAclId", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::EIP")
            .optional("Domain", Scalar)
            .optional("InstanceId", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::EC2::NatGateway")
            .required("AllocationId", Scalar)
            .required("SubnetId", Scalar)
            .optional("Tags", List),
    );

    // IAM
    registry.register(
        ResourceSpec::new("AWS::IAM::Role")
            .required("AssumeRolePolicyDocument", Object)
            .optional("Path", Scalar)
            .optional("RoleName", Scalar)
            .optional("ManagedPolicyArns", List)
            .optional("Policies", List),
    );
    registry.register(
        ResourceSpec::new("AWS::IAM::InstanceProfile")
            .required("Roles", List)
            .optional("Path", Scalar)
            .optional("InstanceProfileName", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::IAM::Policy")
            .required("PolicyName", Scalar)
            .required("PolicyDocument", Object)
            .optional("Roles", List)
            .optional("Groups", List)
            .optional("Users", List),
    );
    registry.register(
        ResourceSpec::new("AWS::IAM::ManagedPolicy")
            .required("PolicyDocument", Object)
            .optional("Description", Scalar)
            .optional("ManagedPolicyName", Scalar)
            .optional("Path", Scalar)
            .optional("Roles", List)
            .optional("Groups", List)
            .optional("Users", List),
    );
    registry.register(
        ResourceSpec::new("AWS::IAM::Group")
            .optional("GroupName", Scalar)
            .optional("Path", Scalar)
            .optional("ManagedPolicyArns", List)
            .optional("Policies", List),
    );

    // S3
    registry.register(
        ResourceSpec::new("AWS::S3::Bucket")
            .optional("BucketName", Scalar)
            .optional("AccessControl", Scalar)
            .optional("VersioningConfiguration", Object)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::S3::BucketPolicy")
            .required("Bucket", Scalar)
            .required("PolicyDocument", Object),
    );

    // ECS / ECR
    registry.register(ResourceSpec::new("AWS::ECS::Cluster").optional("ClusterName", Scalar));
    registry.register(
        ResourceSpec::new("AWS::ECS::TaskDefinition")
            .required("ContainerDefinitions", List)
            .optional("Family", Scalar)
            .optional("TaskRoleArn", Scalar)
            .optional("Volumes", List),
    );
    registry.register(
        ResourceSpec::new("AWS::ECS::Service")
            .required("TaskDefinition", Scalar)
            .optional("Cluster", Scalar)
            .optional("DesiredCount", Scalar)
            .optional("LoadBalancers", List)
            .optional("Role", Scalar)
            .optional("DeploymentConfiguration", Object),
    );
    registry.register(
        ResourceSpec::new("AWS::ECR::Repository")
            .optional("RepositoryName", Scalar)
            .optional("RepositoryPolicyText", Object),
    );

    // Load balancing
    registry.register(
        ResourceSpec::new("AWS::ElasticLoadBalancingV2::LoadBalancer")
            .optional("Name", Scalar)
            .optional("Scheme", Scalar)
            .optional("Subnets", List)
            .optional("SecurityGroups", List)
            .optional("LoadBalancerAttributes", List)
            .optional("Type", Scalar)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::ElasticLoadBalancingV2::TargetGroup")
            .optional("Name", Scalar)
            .optional("Port", Scalar)
            .optional("Protocol", Scalar)
            .optional("VpcId", Scalar)
            .optional("HealthCheckIntervalSeconds", Scalar)
            .optional("HealthCheckProtocol", Scalar)
            .optional("HealthCheckTimeoutSeconds", Scalar)
            .optional("HealthyThresholdCount", Scalar)
            .optional("UnhealthyThresholdCount", Scalar)
            .optional("Matcher", Object)
            .optional("TargetGroupAttributes", List)
            .optional("Tags", List),
    );
    registry.register(
        ResourceSpec::new("AWS::ElasticLoadBalancingV2::Listener")
            .required("LoadBalancerArn", Scalar)
            .required("Port", Scalar)
            .required("Protocol", Scalar)
            .required("DefaultActions", List),
    );
    registry.register(
        ResourceSpec::new("AWS::ElasticLoadBalancing::LoadBalancer")
            .required("Listeners", List)
            .optional("Subnets", List)
            .optional("SecurityGroups", List)
            .optional("CrossZone", Scalar)
            .optional("HealthCheck", Object)
            .optional("ConnectionDrainingPolicy", Object)
            .optional("LoadBalancerName", Scalar),
    );

    // CloudWatch
    registry.register(
        ResourceSpec::new("AWS::CloudWatch::Alarm")
            .required("ComparisonOperator", Scalar)
            .required("EvaluationPeriods", Scalar)
            .optional("AlarmDescription", Scalar)
            .optional("Namespace", Scalar)
            .optional("MetricName", Scalar)
            .optional("Dimensions", List)
            .optional("Statistic", Scalar)
            .optional("Period", Scalar)
            .optional("Threshold", Scalar)
            .optional("AlarmActions", List)
            .optional("OKActions", List)
            .optional("InsufficientDataActions", List),
    );

    // Auto Scaling
    registry.register(
        ResourceSpec::new("AWS::AutoScaling::AutoScalingGroup")
            .required("MinSize", Scalar)
            .required("MaxSize", Scalar)
            .optional("DesiredCapacity", Scalar)
            .optional("LaunchConfigurationName", Scalar)
            .optional("VPCZoneIdentifier", List)
            .optional("AvailabilityZones", List)
            .optional("TargetGroupARNs", List)
            .optional("LoadBalancerNames", List),
    );
    registry.register(
        ResourceSpec::new("AWS::AutoScaling::LaunchConfiguration")
            .required("ImageId", Scalar)
            .required("InstanceType", Scalar)
            .optional("KeyName", Scalar)
            .optional("SecurityGroups", List)
            .optional("IamInstanceProfile", Scalar)
            .optional("UserData", Scalar)
            .optional("AssociatePublicIpAddress", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::AutoScaling::ScalingPolicy")
            .required("AutoScalingGroupName", Scalar)
            .required("ScalingAdjustment", Scalar)
            .required("AdjustmentType", Scalar)
            .optional("Cooldown", Scalar),
    );

    // Deployment pipeline
    registry.register(
        ResourceSpec::new("AWS::CodeBuild::Project")
            .required("ServiceRole", Scalar)
            .required("Source", Object)
            .required("Artifacts", Object)
            .required("Environment", Object)
            .optional("Name", Scalar)
            .optional("Description", Scalar)
            .optional("TimeoutInMinutes", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::CodePipeline::Pipeline")
            .required("RoleArn", Scalar)
            .required("Stages", List)
            .optional("Name", Scalar)
            .optional("ArtifactStore", Object)
            .optional("RestartExecutionOnUpdate", Scalar),
    );

    // Audit and logging pipelines
    registry.register(
        ResourceSpec::new("AWS::CloudTrail::Trail")
            .required("IsLogging", Scalar)
            .required("S3BucketName", Scalar)
            .optional("S3KeyPrefix", Scalar)
            .optional("IncludeGlobalServiceEvents", Scalar)
            .optional("IsMultiRegionTrail", Scalar)
            .optional("EnableLogFileValidation", Scalar),
    );
    registry.register(
        ResourceSpec::new("AWS::KinesisFirehose::DeliveryStream")
            .optional("DeliveryStreamName", Scalar)
            .optional("S3DestinationConfiguration", Object)
            .optional("ElasticsearchDestinationConfiguration", Object),
    );
    registry.register(
        ResourceSpec::new("AWS::Elasticsearch::Domain")
            .optional("DomainName", Scalar)
            .optional("ElasticsearchVersion", Scalar)
            .optional("ElasticsearchClusterConfig", Object)
            .optional("EBSOptions", Object)
            .optional("AccessPolicies", Object)
            .optional("AdvancedOptions", Object)
            .optional("SnapshotOptions", Object),
    );

    // WAF Regional
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::WebACL")
            .required("Name", Scalar)
            .required("MetricName", Scalar)
            .required("DefaultAction", Object)
            .optional("Rules", List),
    );
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::Rule")
            .required("Name", Scalar)
            .required("MetricName", Scalar)
            .optional("Predicates", List),
    );
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::IPSet")
            .required("Name", Scalar)
            .optional("IPSetDescriptors", List),
    );
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::SizeConstraintSet")
            .required("Name", Scalar)
            .required("SizeConstraints", List),
    );
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::SqlInjectionMatchSet")
            .required("Name", Scalar)
            .optional("SqlInjectionMatchTuples", List),
    );
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::XssMatchSet")
            .required("Name", Scalar)
            .optional("XssMatchTuples", List),
    );
    registry.register(
        ResourceSpec::new("AWS::WAFRegional::WebACLAssociation")
            .required("ResourceArn", Scalar)
            .required("WebACLId", Scalar),
    );

    registry
}
